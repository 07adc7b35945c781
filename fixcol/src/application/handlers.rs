use std::path::PathBuf;

use tracing::warn;

use super::Settings;
use fixcol_core::error::{FixcolError, Result};
use fixcol_core::repo::LayoutRepo;
use fixcol_core::{
    ConvertOptions, ConvertRequest, EncodingId, FieldDefinition, LayoutDefinition, LineEnding,
    convert, validate_labels,
};

/// Layouts to edit. A missing or empty settings directory starts an empty set.
fn load_for_edit(repo: &dyn LayoutRepo) -> Result<Vec<LayoutDefinition>> {
    match repo.load() {
        Ok(v) => Ok(v),
        Err(FixcolError::EmptySettings(_)) => Ok(Vec::new()),
        Err(FixcolError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

fn commit(repo: &dyn LayoutRepo, layouts: &[LayoutDefinition]) -> Result<()> {
    validate_labels(layouts)?;
    repo.save(layouts)
}

fn find_mut<'a>(
    layouts: &'a mut [LayoutDefinition],
    label: &str,
) -> Result<&'a mut LayoutDefinition> {
    layouts
        .iter_mut()
        .find(|l| l.label == label)
        .ok_or_else(|| FixcolError::UnknownLayout(label.to_string()))
}

pub fn handle_convert(
    settings: &Settings,
    source: PathBuf,
    dest: PathBuf,
    layout: String,
    encoding: String,
    crlf: bool,
) -> Result<()> {
    // Path problems outrank settings problems, as in the core.
    if !source.is_file() {
        return Err(FixcolError::SourceMissing(source));
    }
    if !dest.is_dir() {
        return Err(FixcolError::DestinationMissing(dest));
    }

    let repo = settings.repo();
    let layouts = repo.load()?;
    validate_labels(&layouts)?;
    let tab = layouts
        .iter()
        .find(|l| l.label == layout)
        .ok_or_else(|| FixcolError::UnknownLayout(layout.clone()))?;

    let req = ConvertRequest {
        source,
        destination_dir: dest,
        encoding: EncodingId::from_selector(&encoding),
        fields: tab.fields.clone(),
    };
    let opts = ConvertOptions {
        scratch_dir: settings.scratch_dir.clone(),
        line_ending: if crlf { LineEnding::CrLf } else { LineEnding::Lf },
    };
    let out = convert(&req, Some(&opts))?;
    eprintln!("convert: {} -> {}", req.source.display(), out.display());

    // The CSV is already written; a failed re-save only warns.
    if let Err(e) = repo.save(&layouts) {
        warn!(error = %e, "could not save layouts after conversion");
    }
    Ok(())
}

pub fn handle_layout_list(settings: &Settings) -> Result<()> {
    let layouts = settings.repo().load()?;
    for l in &layouts {
        println!(
            "{}\t{} fields\twidth {}",
            l.label,
            l.fields.len(),
            l.total_width()
                .map_or_else(|| "overflow".to_string(), |w| w.to_string())
        );
    }
    Ok(())
}

pub fn handle_layout_show(settings: &Settings, label: String) -> Result<()> {
    let mut layouts = settings.repo().load()?;
    let tab = find_mut(&mut layouts, &label)?;
    println!("{:>4}  {:>6}  NAME", "NO", "DIGIT");
    for f in &tab.fields {
        println!("{:>4}  {:>6}  {}", f.position, f.width, f.name);
    }
    Ok(())
}

pub fn handle_layout_add(settings: &Settings, label: String) -> Result<()> {
    let repo = settings.repo();
    let mut layouts = load_for_edit(repo.as_ref())?;
    layouts.push(LayoutDefinition::with_blank_field(label.clone()));
    commit(repo.as_ref(), &layouts)?;
    eprintln!("layout add: {label}");
    Ok(())
}

pub fn handle_layout_rm(settings: &Settings, label: String) -> Result<()> {
    let repo = settings.repo();
    let mut layouts = load_for_edit(repo.as_ref())?;
    let before = layouts.len();
    layouts.retain(|l| l.label != label);
    if layouts.len() == before {
        return Err(FixcolError::UnknownLayout(label));
    }
    commit(repo.as_ref(), &layouts)?;
    eprintln!("layout rm: {label}");
    Ok(())
}

pub fn handle_layout_rename(settings: &Settings, from: String, to: String) -> Result<()> {
    let repo = settings.repo();
    let mut layouts = load_for_edit(repo.as_ref())?;
    find_mut(&mut layouts, &from)?.label = to.clone();
    commit(repo.as_ref(), &layouts)?;
    eprintln!("layout rename: {from} -> {to}");
    Ok(())
}

pub fn handle_field_insert(
    settings: &Settings,
    label: String,
    position: u32,
    name: String,
    width: Option<String>,
) -> Result<()> {
    let repo = settings.repo();
    let mut layouts = load_for_edit(repo.as_ref())?;
    let tab = find_mut(&mut layouts, &label)?;
    let width = width.as_deref().map(FieldDefinition::parse_width).unwrap_or(0);
    let index = position.saturating_sub(1) as usize;
    tab.insert_field(index, FieldDefinition::new(position, name, width));
    tab.renumber();
    commit(repo.as_ref(), &layouts)?;
    eprintln!("field insert: {label} #{position}");
    Ok(())
}

pub fn handle_field_rm(settings: &Settings, label: String, positions: Vec<u32>) -> Result<()> {
    let repo = settings.repo();
    let mut layouts = load_for_edit(repo.as_ref())?;
    let tab = find_mut(&mut layouts, &label)?;
    // Positions refer to the numbering before this command, so renumber once at the end.
    for p in &positions {
        if tab.remove_field(*p).is_none() {
            warn!(label = %label, position = p, "no such field");
        }
    }
    tab.renumber();
    commit(repo.as_ref(), &layouts)?;
    eprintln!("field rm: {label} {positions:?}");
    Ok(())
}

pub fn handle_field_set(
    settings: &Settings,
    label: String,
    position: u32,
    name: Option<String>,
    width: Option<String>,
) -> Result<()> {
    let repo = settings.repo();
    let mut layouts = load_for_edit(repo.as_ref())?;
    let tab = find_mut(&mut layouts, &label)?;
    let field = tab
        .field_mut(position)
        .ok_or_else(|| FixcolError::Format(format!("{label} has no field #{position}")))?;
    if let Some(n) = name {
        field.name = n;
    }
    if let Some(w) = width {
        field.width = FieldDefinition::parse_width(&w);
    }
    commit(repo.as_ref(), &layouts)?;
    eprintln!("field set: {label} #{position}");
    Ok(())
}
