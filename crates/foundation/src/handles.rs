/// Generational handle: a slot index plus the generation the slot had when
/// the handle was issued. A handle whose generation no longer matches its
/// slot is stale and must not resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u32, u32); // (index, generation)

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Handle(index, generation)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn generation(&self) -> u32 {
        self.1
    }
}
