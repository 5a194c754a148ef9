use std::collections::BTreeMap;

/// Window used for keystroke-driven search filters.
pub const SEARCH_THROTTLE_MS: u32 = 500;

/// Trailing-only throttle.
///
/// The first [`push`](Self::push) of a window asks the caller to arm a timer;
/// later pushes only replace the pending value. When the timer fires the
/// caller takes the last value with [`flush`](Self::flush), so one window
/// yields exactly one emission.
#[derive(Debug, Clone)]
pub struct TrailingThrottle<T> {
    pending: Option<T>,
    armed: bool,
}

impl<T> Default for TrailingThrottle<T> {
    fn default() -> Self {
        Self {
            pending: None,
            armed: false,
        }
    }
}

impl<T> TrailingThrottle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value. Returns `true` when a timer must be armed.
    pub fn push(&mut self, value: T) -> bool {
        self.pending = Some(value);
        if self.armed {
            false
        } else {
            self.armed = true;
            true
        }
    }

    /// Close the window and take the last pushed value.
    pub fn flush(&mut self) -> Option<T> {
        self.armed = false;
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// One [`TrailingThrottle`] per key, so writes to different keys in the same
/// window never replace each other.
#[derive(Debug, Clone)]
pub struct KeyedThrottle<K: Ord, T> {
    windows: BTreeMap<K, TrailingThrottle<T>>,
}

impl<K: Ord, T> Default for KeyedThrottle<K, T> {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
        }
    }
}

impl<K: Ord, T> KeyedThrottle<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value for `key`. Returns `true` when a timer must be armed for it.
    pub fn push(&mut self, key: K, value: T) -> bool {
        self.windows.entry(key).or_default().push(value)
    }

    /// Close the window of `key` and take its last pushed value.
    pub fn flush(&mut self, key: &K) -> Option<T> {
        self.windows.remove(key).and_then(|mut window| window.flush())
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.windows.get(key).is_some_and(TrailingThrottle::is_armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_emits_once_with_last_value() {
        let mut throttle = TrailingThrottle::new();
        let mut timers = 0;
        for value in ["j", "ju", "jua", "juan", "juan p"] {
            if throttle.push(value.to_string()) {
                timers += 1;
            }
        }
        assert_eq!(timers, 1);
        assert_eq!(throttle.flush().as_deref(), Some("juan p"));
        assert_eq!(throttle.flush(), None);
    }

    #[test]
    fn test_new_window_after_flush() {
        let mut throttle = TrailingThrottle::new();
        assert!(throttle.push(1));
        assert_eq!(throttle.flush(), Some(1));
        assert!(!throttle.is_armed());
        assert!(throttle.push(2));
        assert!(!throttle.push(3));
        assert_eq!(throttle.flush(), Some(3));
    }

    #[test]
    fn test_keys_throttle_independently() {
        let mut throttle = KeyedThrottle::new();
        assert!(throttle.push("search", "ana"));
        assert!(throttle.push("locality", "cordoba"));
        assert!(!throttle.push("search", "ana m"));
        assert!(throttle.is_armed(&"locality"));

        assert_eq!(throttle.flush(&"search"), Some("ana m"));
        assert!(!throttle.is_armed(&"search"));
        assert!(throttle.is_armed(&"locality"));
        assert_eq!(throttle.flush(&"locality"), Some("cordoba"));
        assert_eq!(throttle.flush(&"locality"), None);
    }
}
