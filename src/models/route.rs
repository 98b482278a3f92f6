//! Hash-based routing over the page registry.
//!
//! URL format: `#/<segment>` with declared arguments carried in the query
//! part, e.g. `#/select-apps?multiSelect=true`. Routes built in code go
//! through constructors that validate against the page's argument
//! contract and fail fast on violations; hashes typed into the address
//! bar are decoded leniently, falling back to Home.

use crate::core::error::RouteError;
use crate::models::page::{ArgType, Page};
use crate::utils::dom;

/// A decoded navigation argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    String(String),
    Int(i64),
}

impl ArgValue {
    fn ty(&self) -> ArgType {
        match self {
            ArgValue::Bool(_) => ArgType::Bool,
            ArgValue::String(_) => ArgType::String,
            ArgValue::Int(_) => ArgType::Int,
        }
    }

    fn encode(&self) -> String {
        match self {
            ArgValue::Bool(v) => v.to_string(),
            ArgValue::String(v) => v.clone(),
            ArgValue::Int(v) => v.to_string(),
        }
    }

    fn parse(ty: ArgType, raw: &str) -> Option<ArgValue> {
        match ty {
            ArgType::Bool => match raw {
                "true" => Some(ArgValue::Bool(true)),
                "false" => Some(ArgValue::Bool(false)),
                _ => None,
            },
            ArgType::String => Some(ArgValue::String(raw.to_string())),
            ArgType::Int => raw.parse().ok().map(ArgValue::Int),
        }
    }
}

/// Validated argument values attached to a route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgValues(Vec<(&'static str, ArgValue)>);

impl ArgValues {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn bool_arg(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            ArgValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// A navigable route: a registered page plus validated argument values.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRoute {
    pub page: Page,
    pub args: ArgValues,
}

impl AppRoute {
    /// Route to a page that declares no required arguments.
    ///
    /// # Panics
    ///
    /// Panics if the page declares a required argument; navigating there
    /// without values is a programming error, not a runtime condition.
    pub fn new(page: Page) -> Self {
        Self::with_args(page, Vec::new())
    }

    /// Route to the app-selection page.
    pub fn select_apps(multi_select: bool) -> Self {
        Self::with_args(
            Page::SelectApps,
            vec![("multiSelect", ArgValue::Bool(multi_select))],
        )
    }

    /// Route to a page with explicit argument values.
    ///
    /// # Panics
    ///
    /// Panics if the values do not satisfy the page's argument contract.
    pub fn with_args(page: Page, args: Vec<(&'static str, ArgValue)>) -> Self {
        let args = ArgValues(args);
        if let Err(e) = validate(page, &args) {
            panic!("invalid route for {:?}: {}", page, e);
        }
        Self { page, args }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        let mut hash = format!("#/{}", self.page.segment());
        for (i, (name, value)) in self.args.0.iter().enumerate() {
            hash.push(if i == 0 { '?' } else { '&' });
            hash.push_str(name);
            hash.push('=');
            hash.push_str(&value.encode());
        }
        hash
    }

    /// Decode a URL hash against the page registry.
    pub fn decode(hash: &str) -> Result<Self, RouteError> {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        if path.is_empty() {
            return Ok(Self::new(Page::Home));
        }

        let (segment, query) = match path.split_once('?') {
            Some((segment, query)) => (segment, query),
            None => (path, ""),
        };
        let page = Page::from_segment(segment)
            .ok_or_else(|| RouteError::UnknownPage(segment.to_string()))?;

        let mut args = Vec::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let decl = page
                .arguments()
                .iter()
                .find(|a| a.name == name)
                .ok_or_else(|| RouteError::UnknownArgument(name.to_string()))?;
            let value = ArgValue::parse(decl.ty, raw).ok_or(RouteError::TypeMismatch {
                name: decl.name,
                expected: decl.ty,
            })?;
            args.push((decl.name, value));
        }

        let args = ArgValues(args);
        validate(page, &args)?;
        Ok(Self { page, args })
    }

    /// Parse a URL hash, falling back to Home for anything that does not
    /// decode. Address bar input is not a programming error.
    pub fn from_hash(hash: &str) -> Self {
        Self::decode(hash).unwrap_or_else(|_| Self::new(Page::Home))
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Update the browser URL to match this route (adds a history entry).
    pub fn push(&self) {
        dom::push_hash(&self.to_hash());
    }
}

/// Check argument values against a page's declarations.
fn validate(page: Page, args: &ArgValues) -> Result<(), RouteError> {
    for decl in page.arguments() {
        match args.get(decl.name) {
            Some(value) if value.ty() != decl.ty => {
                return Err(RouteError::TypeMismatch {
                    name: decl.name,
                    expected: decl.ty,
                });
            }
            None if decl.required => return Err(RouteError::MissingArgument(decl.name)),
            _ => {}
        }
    }
    for (name, _) in &args.0 {
        if !page.arguments().iter().any(|a| a.name == *name) {
            return Err(RouteError::UnknownArgument(name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_home() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::new(Page::Home));
        assert_eq!(AppRoute::from_hash("#"), AppRoute::new(Page::Home));
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::new(Page::Home));
    }

    #[test]
    fn test_tab_route_round_trip() {
        for page in Page::tabs() {
            let route = AppRoute::new(page);
            assert_eq!(AppRoute::decode(&route.to_hash()), Ok(route));
        }
    }

    #[test]
    fn test_select_apps_round_trip() {
        let route = AppRoute::select_apps(true);
        assert_eq!(route.to_hash(), "#/select-apps?multiSelect=true");
        let decoded = AppRoute::decode("#/select-apps?multiSelect=true").unwrap();
        assert_eq!(decoded, route);
        assert_eq!(decoded.args.bool_arg("multiSelect"), Some(true));
    }

    #[test]
    fn test_missing_required_argument_is_an_error() {
        assert_eq!(
            AppRoute::decode("#/select-apps"),
            Err(RouteError::MissingArgument("multiSelect"))
        );
    }

    #[test]
    fn test_mistyped_argument_is_an_error() {
        assert_eq!(
            AppRoute::decode("#/select-apps?multiSelect=yes"),
            Err(RouteError::TypeMismatch {
                name: "multiSelect",
                expected: ArgType::Bool,
            })
        );
    }

    #[test]
    fn test_undeclared_argument_is_an_error() {
        assert_eq!(
            AppRoute::decode("#/home?multiSelect=true"),
            Err(RouteError::UnknownArgument("multiSelect".to_string()))
        );
    }

    #[test]
    fn test_unknown_page_falls_back_to_home() {
        assert_eq!(
            AppRoute::decode("#/nonsense"),
            Err(RouteError::UnknownPage("nonsense".to_string()))
        );
        assert_eq!(AppRoute::from_hash("#/nonsense"), AppRoute::new(Page::Home));
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn test_programmatic_route_without_required_argument_panics() {
        let _ = AppRoute::new(Page::SelectApps);
    }
}
