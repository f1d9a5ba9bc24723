//! Scripted stand-ins for the serial device

use distance_graph::LineSource;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// Line source that replays a fixed script, then reports timeouts
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<VecDeque<io::Result<Vec<u8>>>>>,
    reads: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue lines, each terminated with `\n`
    pub fn with_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_bytes(format!("{}\n", line.as_ref()).into_bytes());
        }
        self
    }

    pub fn push_bytes(&self, bytes: Vec<u8>) {
        self.script.lock().unwrap().push_back(Ok(bytes));
    }

    pub fn push_error(&self, kind: io::ErrorKind) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(io::Error::new(kind, "scripted failure")));
    }

    /// Number of `read_line` calls made so far (shared across clones)
    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        *self.reads.lock().unwrap() += 1;
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
