//! Upstream English dictionary source descriptor.

use serde::{Deserialize, Serialize};

use super::presence::Presence;

/// Versioned dictionary source used when assembling word lists.
///
/// `commit_ref` is only meaningful when `was_commit_ref_set` is true; an unset
/// dictionary always carries an empty reference. The flag is derived while
/// decoding and is the only signal for "the document named a reference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EnglishDictionaryDocument", into = "EnglishDictionaryDocument")]
pub struct EnglishDictionary {
    commit_ref: String,
    was_commit_ref_set: bool,
}

impl EnglishDictionary {
    /// Dictionary pinned to an explicit reference (branch, tag or hash).
    pub fn with_commit_ref(commit_ref: impl Into<String>) -> Self {
        Self { commit_ref: commit_ref.into(), was_commit_ref_set: true }
    }

    pub fn commit_ref(&self) -> &str {
        &self.commit_ref
    }

    pub fn was_commit_ref_set(&self) -> bool {
        self.was_commit_ref_set
    }

    /// The reference, if the document supplied one.
    pub fn explicit_commit_ref(&self) -> Option<&str> {
        self.was_commit_ref_set.then_some(self.commit_ref.as_str())
    }
}

/// On-disk shape of the `english-dictionary` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct EnglishDictionaryDocument {
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    commit_ref: Presence<Option<String>>,
}

impl From<EnglishDictionaryDocument> for EnglishDictionary {
    fn from(document: EnglishDictionaryDocument) -> Self {
        match document.commit_ref {
            Presence::Absent => Self::default(),
            Presence::Present(value) => Self::with_commit_ref(value.unwrap_or_default()),
        }
    }
}

impl From<EnglishDictionary> for EnglishDictionaryDocument {
    fn from(dictionary: EnglishDictionary) -> Self {
        let commit_ref = if dictionary.was_commit_ref_set {
            Presence::Present(Some(dictionary.commit_ref))
        } else {
            Presence::Absent
        };
        Self { commit_ref }
    }
}
