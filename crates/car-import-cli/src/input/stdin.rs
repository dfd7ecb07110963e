use std::io::{self, Read};

/// Piped request text, if any. An interactive terminal or a blank pipe
/// both mean no request was given.
pub fn read_piped_request() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(non_blank(buffer))
}

fn non_blank(buffer: String) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return None;
    }
    tracing::debug!(bytes = trimmed.len(), "request piped on stdin");
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_pipe_is_no_request() {
        assert_eq!(non_blank(" \n\t".into()), None);
    }

    #[test]
    fn test_request_is_trimmed() {
        assert_eq!(non_blank("{}\n".into()).as_deref(), Some("{}"));
    }
}
