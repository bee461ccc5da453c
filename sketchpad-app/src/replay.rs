//! Script loading and output export for the replay tool.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::{CliArgs, EditorConfig, EditorEvent, EditorResult, HeadlessEditor};

/// Read a JSON array of editor events.
///
/// # Errors
///
/// Returns [`crate::EditorError::Io`] if the file cannot be opened and
/// [`crate::EditorError::Script`] if it is not a valid event list.
pub fn load_script(path: &Path) -> EditorResult<Vec<EditorEvent>> {
    let reader = BufReader::new(File::open(path)?);
    let events: Vec<EditorEvent> = serde_json::from_reader(reader)?;
    tracing::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Build an editor from the arguments and run the requested session.
///
/// The demo scene is loaded when `--demo` is set or no script is given;
/// script events are then queued and drained in order.
///
/// # Errors
///
/// Returns an error if the script cannot be read or an event fails.
pub fn run(args: &CliArgs) -> EditorResult<HeadlessEditor> {
    let mut editor = HeadlessEditor::headless(EditorConfig::from(args.clone()));

    if args.demo || args.script.is_none() {
        editor.load_demo()?;
    }
    if let Some(path) = &args.script {
        for event in load_script(path)? {
            editor.enqueue(event);
        }
    }

    let processed = editor.run_pending()?;
    tracing::info!(
        "Processed {} events, {} shapes live",
        processed,
        editor.shapes().len()
    );
    Ok(editor)
}

/// Write the vector tree as SVG.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_svg(editor: &HeadlessEditor, out: &mut impl Write) -> EditorResult<()> {
    out.write_all(editor.to_svg().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Write the current overlay frame to a PNG file.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_overlay(editor: &HeadlessEditor, path: &Path) -> EditorResult<()> {
    std::fs::write(path, editor.overlay_png()?)?;
    tracing::info!("Wrote overlay to {}", path.display());
    Ok(())
}
