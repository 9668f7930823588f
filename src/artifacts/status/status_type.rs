use colored::{ColoredString, Colorize};

/// Normalized `wc-status/@item` value reported by `svn status --xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusType {
    Added,
    Conflicted,
    Deleted,
    External,
    Ignored,
    Incomplete,
    Merged,
    Missing,
    Modified,
    None,
    Normal,
    Obstructed,
    Replaced,
    Unversioned,
}

pub const STATUS_TYPE_LOOKUP: phf::Map<&'static str, StatusType> = phf::phf_map! {
    "added" => StatusType::Added,
    "conflicted" => StatusType::Conflicted,
    "deleted" => StatusType::Deleted,
    "external" => StatusType::External,
    "ignored" => StatusType::Ignored,
    "incomplete" => StatusType::Incomplete,
    "merged" => StatusType::Merged,
    "missing" => StatusType::Missing,
    "modified" => StatusType::Modified,
    "none" => StatusType::None,
    "normal" => StatusType::Normal,
    "obstructed" => StatusType::Obstructed,
    "replaced" => StatusType::Replaced,
    "unversioned" => StatusType::Unversioned,
};

impl StatusType {
    pub fn from_raw(raw: &str) -> Option<Self> {
        STATUS_TYPE_LOOKUP.get(raw).copied()
    }

    pub fn raw_name(&self) -> &'static str {
        match self {
            StatusType::Added => "added",
            StatusType::Conflicted => "conflicted",
            StatusType::Deleted => "deleted",
            StatusType::External => "external",
            StatusType::Ignored => "ignored",
            StatusType::Incomplete => "incomplete",
            StatusType::Merged => "merged",
            StatusType::Missing => "missing",
            StatusType::Modified => "modified",
            StatusType::None => "none",
            StatusType::Normal => "normal",
            StatusType::Obstructed => "obstructed",
            StatusType::Replaced => "replaced",
            StatusType::Unversioned => "unversioned",
        }
    }

    /// First status column as printed by plain `svn status`.
    pub fn code(&self) -> char {
        match self {
            StatusType::Added => 'A',
            StatusType::Conflicted => 'C',
            StatusType::Deleted => 'D',
            StatusType::External => 'X',
            StatusType::Ignored => 'I',
            StatusType::Incomplete | StatusType::Missing => '!',
            StatusType::Merged => 'G',
            StatusType::Modified => 'M',
            StatusType::None | StatusType::Normal => ' ',
            StatusType::Obstructed => '~',
            StatusType::Replaced => 'R',
            StatusType::Unversioned => '?',
        }
    }

    pub fn colored_code(&self) -> ColoredString {
        let code = self.code().to_string();
        match self {
            StatusType::Added | StatusType::Replaced => code.green(),
            StatusType::Deleted | StatusType::Missing | StatusType::Incomplete => code.red(),
            StatusType::Conflicted | StatusType::Obstructed => code.red().bold(),
            StatusType::Modified | StatusType::Merged => code.yellow(),
            StatusType::Unversioned | StatusType::Ignored => code.dimmed(),
            StatusType::External | StatusType::None | StatusType::Normal => code.normal(),
        }
    }
}

impl std::fmt::Display for StatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_name())
    }
}
