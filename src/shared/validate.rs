/**
 * Boundary Validation
 *
 * Argument validation applied at the API boundary before any store
 * operation runs. Validation here is shape-level only: non-empty, bounded
 * length. Coordinate ranges and color palettes are deliberately not
 * validated; the store accepts whatever the client's canvas produced.
 */
use crate::shared::error::SharedError;
use crate::shared::models::{MAX_BOARD_ID_LENGTH, MAX_COLOR_LENGTH, MAX_NOTE_TEXT_LENGTH};

/// Validate a board slug
///
/// Slugs must be non-empty (after trimming) and bounded in length. They are
/// otherwise opaque: the server does not restrict the character set beyond
/// rejecting embedded newlines, which would corrupt log lines and SSE frames.
pub fn validate_board_id(board_id: &str) -> Result<(), SharedError> {
    if board_id.trim().is_empty() {
        return Err(SharedError::validation("boardId", "must not be empty"));
    }
    if board_id.len() > MAX_BOARD_ID_LENGTH {
        return Err(SharedError::validation(
            "boardId",
            format!("must be at most {} bytes", MAX_BOARD_ID_LENGTH),
        ));
    }
    if board_id.contains('\n') || board_id.contains('\r') {
        return Err(SharedError::validation(
            "boardId",
            "must not contain newlines",
        ));
    }
    Ok(())
}

/// Validate a note's text content
///
/// Empty text is allowed (a freshly placed note starts blank); only the
/// length is bounded.
pub fn validate_note_text(text: &str) -> Result<(), SharedError> {
    if text.len() > MAX_NOTE_TEXT_LENGTH {
        return Err(SharedError::validation(
            "text",
            format!("must be at most {} bytes", MAX_NOTE_TEXT_LENGTH),
        ));
    }
    Ok(())
}

/// Validate a color string (notes and drawings)
pub fn validate_color(color: &str) -> Result<(), SharedError> {
    if color.trim().is_empty() {
        return Err(SharedError::validation("color", "must not be empty"));
    }
    if color.len() > MAX_COLOR_LENGTH {
        return Err(SharedError::validation(
            "color",
            format!("must be at most {} bytes", MAX_COLOR_LENGTH),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_board_id() {
        assert!(validate_board_id("team-standup").is_ok());
    }

    #[test]
    fn test_empty_board_id_rejected() {
        assert!(validate_board_id("").is_err());
        assert!(validate_board_id("   ").is_err());
    }

    #[test]
    fn test_oversized_board_id_rejected() {
        let long = "a".repeat(MAX_BOARD_ID_LENGTH + 1);
        assert!(validate_board_id(&long).is_err());
    }

    #[test]
    fn test_board_id_with_newline_rejected() {
        assert!(validate_board_id("foo\nbar").is_err());
    }

    #[test]
    fn test_empty_note_text_allowed() {
        assert!(validate_note_text("").is_ok());
    }

    #[test]
    fn test_oversized_note_text_rejected() {
        let long = "a".repeat(MAX_NOTE_TEXT_LENGTH + 1);
        assert!(validate_note_text(&long).is_err());
    }

    #[test]
    fn test_color_validation() {
        assert!(validate_color("yellow").is_ok());
        assert!(validate_color("#000000").is_ok());
        assert!(validate_color("").is_err());
        assert!(validate_color(&"x".repeat(MAX_COLOR_LENGTH + 1)).is_err());
    }
}
