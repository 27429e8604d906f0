use std::str::FromStr;

use derive_getters::Getters;
use derive_new::new;
use url::form_urlencoded;

use crate::error::{Result, TngError};

/// The two lookups the TNG API exposes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryKind {
    Person,
    Family,
}

impl QueryKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            QueryKind::Person => "api_person.php",
            QueryKind::Family => "api_family.php",
        }
    }

    fn id_key(&self) -> &'static str {
        match self {
            QueryKind::Person => "personID",
            QueryKind::Family => "familyID",
        }
    }

    // TNG prefixes record IDs with a kind letter, e.g. person 1 is "I1".
    fn id_prefix(&self) -> &'static str {
        match self {
            QueryKind::Person => "I",
            QueryKind::Family => "F",
        }
    }

    /// Percent-encoded query string for this kind, e.g. `personID=I1&tree=tree1`.
    pub fn query_string(&self, args: &QueryArgs) -> String {
        let id = match args.id() {
            Some(id) => id.to_string(),
            None => String::new(),
        };
        let tree = args.tree().as_deref().unwrap_or_default();

        form_urlencoded::Serializer::new(String::new())
            .append_pair(self.id_key(), &format!("{}{}", self.id_prefix(), id))
            .append_pair("tree", tree)
            .finish()
    }
}

impl FromStr for QueryKind {
    type Err = TngError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "person" => Ok(QueryKind::Person),
            "family" => Ok(QueryKind::Family),
            _ => Err(TngError::InvalidRequestKind(s.to_string())),
        }
    }
}

/// Arguments accepted by every lookup. Missing values render as empty
/// strings and the remote side decides how to answer.
#[derive(Clone, Debug, Default, Getters, new)]
pub struct QueryArgs {
    id: Option<u32>,
    tree: Option<String>,
}

/// Build the encoded query string for a lookup. The kind comes in as its
/// external string form; anything other than `person` or `family` is
/// rejected here, before any request goes out.
pub fn build_url(kind: &str, args: &QueryArgs) -> Result<String> {
    Ok(kind.parse::<QueryKind>()?.query_string(args))
}
