//! Field rules shared by the task and project services.

pub const TITLE_MAX_CHARS: usize = 255;
pub const MIN_PRIORITY: i32 = 1;

pub fn validate_title(title: &str) -> Result<(), String> {
    let len = title.chars().count();
    if len == 0 {
        return Err("title must not be empty".to_string());
    }
    if len > TITLE_MAX_CHARS {
        return Err(format!(
            "title must be at most {TITLE_MAX_CHARS} characters, got {len}"
        ));
    }
    Ok(())
}

pub fn validate_priority(priority: i32) -> Result<(), String> {
    if priority < MIN_PRIORITY {
        return Err(format!("priority must be >= {MIN_PRIORITY}, got {priority}"));
    }
    Ok(())
}
