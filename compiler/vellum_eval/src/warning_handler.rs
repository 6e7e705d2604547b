//! Side channel for `@warn` and `@debug` output.
//!
//! Warnings never affect evaluation results. Embedders pick where they go:
//! - stderr (default)
//! - an in-memory buffer (tests, embedding hosts that surface warnings)
//! - nowhere

use parking_lot::Mutex;

/// Writes warnings to stderr.
#[derive(Default)]
pub struct StderrWarningHandler;

impl StderrWarningHandler {
    pub fn emit(&self, msg: &str) {
        eprint!("{}", with_newline(msg));
    }
}

/// Captures warnings in memory.
pub struct BufferWarningHandler {
    buffer: Mutex<String>,
}

impl BufferWarningHandler {
    pub fn new() -> Self {
        BufferWarningHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn emit(&self, msg: &str) {
        self.buffer.lock().push_str(&with_newline(msg));
    }

    /// Everything emitted so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferWarningHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Every message ends in exactly one line break.
fn with_newline(msg: &str) -> String {
    let mut out = msg.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Warning handler using enum dispatch.
pub enum WarningHandlerImpl {
    Stderr(StderrWarningHandler),
    Buffer(BufferWarningHandler),
    /// Discards everything.
    Silent,
}

impl WarningHandlerImpl {
    pub fn emit(&self, msg: &str) {
        match self {
            Self::Stderr(h) => h.emit(msg),
            Self::Buffer(h) => h.emit(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stderr(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared warning handler, cloned into every interpreter of a compile.
pub type SharedWarningHandler = std::sync::Arc<WarningHandlerImpl>;

pub fn stderr_handler() -> SharedWarningHandler {
    std::sync::Arc::new(WarningHandlerImpl::Stderr(StderrWarningHandler))
}

pub fn buffer_handler() -> SharedWarningHandler {
    std::sync::Arc::new(WarningHandlerImpl::Buffer(BufferWarningHandler::new()))
}

pub fn silent_handler() -> SharedWarningHandler {
    std::sync::Arc::new(WarningHandlerImpl::Silent)
}
