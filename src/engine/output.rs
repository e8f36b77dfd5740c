#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Text(String),
    Event(String),
    /// Per-turn status line (inventory).
    Status(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn status(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Status(s));
        }
    }

    /// All blocks joined with newlines.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Text(s) | OutputBlock::Event(s) | OutputBlock::Status(s) => {
                    s.trim_end()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
