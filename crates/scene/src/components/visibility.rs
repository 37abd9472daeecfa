#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn visible() -> Self {
        Self { visible: true }
    }

    pub fn hidden() -> Self {
        Self { visible: false }
    }

    pub fn when(visible: bool) -> Self {
        Self { visible }
    }
}
