// Reel suggestion prompt.

use crate::reels::models::ReelRequest;

/// Upper bound on how many clips the model is asked for.
pub const MAX_CLIPS: usize = 6;

pub fn build_reels_prompt(request: &ReelRequest) -> String {
    let theme = if request.theme.trim().is_empty() {
        "not specified"
    } else {
        request.theme.trim()
    };
    let focus = if request.prompt.trim().is_empty() {
        "the most engaging, self-contained moments"
    } else {
        request.prompt.trim()
    };
    let subtitles = if request.interactive_subtitles {
        "Clips will carry animated word-by-word subtitles, so favour segments with clear speech."
    } else {
        "Clips will have no subtitles, so favour segments that work visually."
    };

    format!(
        r#"Propose up to {max} short-form vertical clips ("reels") cut from an uploaded video.

## Video
- File name: {file}
- Size: {size_mb:.1} MB

## Request
- Target clip length: {length}
- Content theme: {theme}
- What to look for: {focus}
- {subtitles}

## Output
Return a JSON object of this exact shape:
{{"clips": [{{"id": "1", "title": "...", "duration": "0:28", "score": 0-100, "description": "..."}}]}}

`score` is your estimate of virality from 0 to 100. Order clips by score, highest first.
Titles must be under 60 characters."#,
        max = MAX_CLIPS,
        file = request.file_name,
        size_mb = request.size_bytes as f64 / (1024.0 * 1024.0),
        length = request.clip_length.as_str(),
        theme = theme,
        focus = focus,
        subtitles = subtitles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reels::models::ClipLength;

    fn request() -> ReelRequest {
        ReelRequest {
            file_name: "match.mp4".to_string(),
            content_type: Some("video/mp4".to_string()),
            size_bytes: 3 * 1024 * 1024,
            clip_length: ClipLength::OneMinute,
            prompt: "every goal".to_string(),
            theme: String::new(),
            interactive_subtitles: false,
        }
    }

    #[test]
    fn test_prompt_carries_request_fields() {
        let prompt = build_reels_prompt(&request());
        assert!(prompt.contains("match.mp4"));
        assert!(prompt.contains("3.0 MB"));
        assert!(prompt.contains("60s~89s"));
        assert!(prompt.contains("every goal"));
        assert!(prompt.contains("Content theme: not specified"));
        assert!(prompt.contains("no subtitles"));
    }
}
