/// Module tags for log line attribution

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Chain,
    Metadata,
    Viewer,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Chain => "CHAIN",
            LogTag::Metadata => "METADATA",
            LogTag::Viewer => "VIEWER",
        }
    }
}
