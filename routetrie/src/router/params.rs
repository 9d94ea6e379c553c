//! Defines `Param` and `Params`, the values bound to the dynamic segments of a template.
use std::ops::Index;
use std::slice;

/// A single resolved path parameter, consisting of the declared name and the bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Name declared in the template, without its marker.
    pub key: String,
    /// Portion of the request path bound to `key`.
    pub value: String,
}

impl Param {
    /// Creates a new `Param`.
    pub fn new<K, V>(key: K, value: V) -> Param
    where
        K: Into<String>,
        V: Into<String>,
    {
        Param {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of `Param` values handed to a handler.
///
/// The order is the declaration order of the dynamic segments in the template, so values may be
/// read positionally. Keys are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    /// Creates an empty `Params`.
    pub fn new() -> Self {
        Params(Vec::new())
    }

    /// Appends a parameter after all existing ones.
    pub fn push(&mut self, param: Param) {
        self.0.push(param);
    }

    /// Value of the first parameter whose key is `name`.
    pub fn by_name(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.key == name)
            .map(|p| p.value.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no parameters were bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the parameters in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, Param> {
        self.0.iter()
    }
}

impl Index<usize> for Params {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        &self.0[i].value
    }
}

impl From<Vec<Param>> for Params {
    fn from(params: Vec<Param>) -> Self {
        Params(params)
    }
}

impl std::iter::FromIterator<Param> for Params {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Params(iter.into_iter().collect())
    }
}

impl IntoIterator for Params {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Params {
        vec![
            Param::new("id", "42"),
            Param::new("name", "alice"),
            Param::new("id", "43"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keeps_declaration_order() {
        let params = sample();
        let keys: Vec<&str> = params.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "name", "id"]);
        assert_eq!(&params[0], "42");
        assert_eq!(&params[2], "43");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn by_name_returns_first_match() {
        let params = sample();
        assert_eq!(params.by_name("id"), Some("42"));
        assert_eq!(params.by_name("name"), Some("alice"));
        assert_eq!(params.by_name("missing"), None);
    }

    #[test]
    fn push_appends() {
        let mut params = Params::new();
        assert!(params.is_empty());
        params.push(Param::new("filepath", "css/site.css"));
        assert_eq!(params.by_name("filepath"), Some("css/site.css"));
        assert_eq!(params.into_iter().count(), 1);
    }
}
