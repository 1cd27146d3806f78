use std::sync::Mutex;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Activate buffering. While active, warnings are stored instead of being
/// printed to stderr, so they can't corrupt the TUI display.
pub fn activate() {
    *BUFFER.lock().unwrap() = Some(Vec::new());
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    BUFFER.lock().unwrap().take().unwrap_or_default()
}

/// Write a warning message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    let mut guard = BUFFER.lock().unwrap();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// Like `eprintln!`, but routes through the stderr buffer when it is active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::warn(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_messages_are_collected() {
        activate();
        warn("first".to_string());
        warn("second".to_string());
        let drained = drain();
        // Other tests may warn concurrently, so check containment not equality
        assert!(drained.contains(&"first".to_string()));
        assert!(drained.contains(&"second".to_string()));
        // A second drain finds nothing
        assert!(drain().is_empty());
    }
}
