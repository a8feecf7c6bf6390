// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use visitpass_core::{ComposedTimestamp, Emitter};

/// An emitter that remembers every value it receives. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Rc<RefCell<Vec<ComposedTimestamp>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ComposedTimestamp> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn last(&self) -> Option<ComposedTimestamp> {
        self.0.borrow().last().cloned()
    }
}

impl Emitter for Recorder {
    fn emit(&mut self, value: ComposedTimestamp) {
        self.0.borrow_mut().push(value);
    }
}
