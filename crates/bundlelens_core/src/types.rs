use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Function,
    Object,
    Array,
    String,
    WebpackChunk,
}

impl ItemKind {
    pub fn marker(self) -> &'static str {
        match self {
            ItemKind::Function => "⚙️",
            ItemKind::Object => "📋",
            ItemKind::Array => "📊",
            ItemKind::String => "📝",
            ItemKind::WebpackChunk => "📦",
        }
    }
}

/// An oversized construct found inside a built file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeavyItem {
    pub name: String,
    /// Approximate byte span; zero for named chunks whose size is unknown.
    pub size: usize,
    pub kind: ItemKind,
}

/// How a built file is loaded, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Classification {
    pub is_main: bool,
    pub is_dynamic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Main,
    Dynamic,
    Other,
}

impl FileKind {
    pub fn marker(self) -> &'static str {
        match self {
            FileKind::Main => "🏠",
            FileKind::Dynamic => "📦",
            FileKind::Other => "📄",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub file_name: String,
    /// UTF-8 byte length of the file's text.
    pub file_size: u64,
    pub is_main: bool,
    pub is_dynamic: bool,
    pub modules: Vec<String>,
    pub libraries: Vec<String>,
    pub largest_items: Vec<HeavyItem>,
}

impl FileAnalysis {
    /// Main takes precedence when a file matches both conventions.
    pub fn kind(&self) -> FileKind {
        if self.is_main {
            FileKind::Main
        } else if self.is_dynamic {
            FileKind::Dynamic
        } else {
            FileKind::Other
        }
    }
}
