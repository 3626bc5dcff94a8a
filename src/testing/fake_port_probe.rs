use std::cell::RefCell;
use std::collections::HashSet;

use crate::ports::PortProbe;

/// Port probe with a fixed set of busy ports.
#[derive(Debug, Default)]
pub struct FakePortProbe {
    busy: HashSet<u16>,
    probed: RefCell<Vec<u16>>,
}

impl FakePortProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occupy(&mut self, port: u16) {
        self.busy.insert(port);
    }

    pub fn probed(&self) -> Vec<u16> {
        self.probed.borrow().clone()
    }
}

impl PortProbe for FakePortProbe {
    fn is_free(&self, port: u16) -> bool {
        self.probed.borrow_mut().push(port);
        !self.busy.contains(&port)
    }
}
