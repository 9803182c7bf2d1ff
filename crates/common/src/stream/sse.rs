use faststr::FastStr;

/// One fully-formed server-sent event.
#[derive(Debug)]
pub struct SseMessage {
    #[allow(unused)]
    pub event: FastStr,
    pub data:  FastStr,
}

/// Incremental SSE parser: raw bytes in via [`feed`](Self::feed), complete
/// events out via [`next_event`](Self::next_event). Partial lines (and
/// partial UTF-8 sequences) stay buffered until the rest arrives, so the
/// upstream body can be fed chunk by chunk however the transport splits it.
///
/// Each relay invocation owns its own parser; nothing here is shared.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    event:  String,
    data:   String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Drains buffered input up to the next dispatched event, if any.
    pub fn next_event(&mut self) -> Option<SseMessage> {
        while let Some(line) = self.take_line() {
            if line.is_empty() {
                if let Some(message) = self.dispatch() {
                    return Some(message);
                }
                continue;
            }
            // comment lines carry heartbeats, drop them
            if line.starts_with(':') {
                continue;
            }
            let (field, value) = match line.split_once(':') {
                Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                None => (line.as_str(), ""),
            };
            match field {
                "event" => {
                    self.event.clear();
                    self.event.push_str(value);
                }
                "data" => {
                    self.data.push_str(value);
                    self.data.push('\n');
                }
                // id and retry have no meaning for a one-shot relay
                _ => {}
            }
        }
        None
    }

    /// An event that never saw a `data:` line is not dispatched.
    fn dispatch(&mut self) -> Option<SseMessage> {
        let event = std::mem::take(&mut self.event);
        let mut data = std::mem::take(&mut self.data);
        if data.is_empty() {
            return None;
        }
        data.pop();
        let event = if event.is_empty() {
            "message".into()
        } else {
            event.into()
        };
        Some(SseMessage {
            event,
            data: data.into(),
        })
    }

    fn take_line(&mut self) -> Option<String> {
        let pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }
}
