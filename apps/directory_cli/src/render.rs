use directory_core::LoadState;
use shared::domain::UserRecord;

pub const TITLE: &str = "User Directory";
const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

pub fn loading_line(frame: usize) -> String {
    let spinner = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
    format!("{spinner} Loading users...")
}

pub fn render_card(record: &UserRecord) -> String {
    format!(
        "  {}\n  {}\n  Age: {}\n  image: {}",
        record.name(),
        record.email(),
        record.age(),
        record.image_url()
    )
}

pub fn render_header() -> String {
    format!("{TITLE}\n{}\n", "=".repeat(TITLE.chars().count()))
}

/// Everything below the header. `frame` only affects the loading indicator.
pub fn render_body(state: &LoadState, frame: usize) -> String {
    match state {
        LoadState::Empty | LoadState::Loading => loading_line(frame),
        LoadState::Loaded(records) if records.is_empty() => "No users to show.".to_string(),
        LoadState::Loaded(records) => records
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
        LoadState::Failed(err) => format!(
            "Could not load users ({}): {}",
            err.code.as_str(),
            err.message
        ),
    }
}

pub fn render_screen(state: &LoadState, frame: usize) -> String {
    format!("{}{}\n", render_header(), render_body(state, frame))
}

pub fn render_json(records: &[UserRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
