//! Route tables and the ordered scan that resolves a path against them
//!
//! Exactly one table is active at a time. [`select_routes`] picks it from the
//! authenticated flag alone; the two tables are never merged.
//!
//! Matching walks the entries in declaration order and the first match wins.
//! Every table ends with a catch-all that redirects to `/`, so resolution is
//! total: an unknown path is never an error.

use lazy_static::lazy_static;
use tracing::debug;

/// Screens the client can render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    // Authenticated
    Home,
    Ride,
    EditAccount,
    Settings,
    Places,
    AddPlace,
    FindAddress,

    // Anonymous
    OutHome,
    PhoneLogin,
    VerifyPhone,
    SocialLogin,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Ride => "Ride",
            Page::EditAccount => "Edit Account",
            Page::Settings => "Settings",
            Page::Places => "Places",
            Page::AddPlace => "Add Place",
            Page::FindAddress => "Find Address",
            Page::OutHome => "Welcome",
            Page::PhoneLogin => "Phone Login",
            Page::VerifyPhone => "Verify Phone",
            Page::SocialLogin => "Social Login",
        }
    }

    /// Whether the page lives in the authenticated table
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Page::Home
                | Page::Ride
                | Page::EditAccount
                | Page::Settings
                | Page::Places
                | Page::AddPlace
                | Page::FindAddress
        )
    }
}

/// Which of the two tables a [`RouteTable`] is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTableKind {
    Authenticated,
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// A path pattern such as `/verify-phone/:number`, or the catch-all `*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Segments {
        raw: &'static str,
        segments: Vec<Segment>,
    },
    CatchAll,
}

impl PathPattern {
    pub fn parse(raw: &'static str) -> Self {
        if raw == "*" {
            return PathPattern::CatchAll;
        }

        let segments = split_segments(raw)
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(s),
            })
            .collect();

        PathPattern::Segments { raw, segments }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathPattern::Segments { raw, .. } => *raw,
            PathPattern::CatchAll => "*",
        }
    }

    fn matches(&self, path: &[&str], exact: bool) -> Option<Params> {
        let segments = match self {
            PathPattern::CatchAll => return Some(Params::default()),
            PathPattern::Segments { segments, .. } => segments,
        };

        if path.len() < segments.len() || (exact && path.len() != segments.len()) {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal.eq_ignore_ascii_case(part) => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.0.push((*name, (*part).to_string())),
            }
        }

        Some(params)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Named parameters captured from `:name` segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target<H> {
    Render(H),
    Redirect(&'static str),
}

/// One `(pattern, exact, handler)` row of a table
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pattern: PathPattern,
    exact: bool,
    target: Target<H>,
}

impl<H> RouteEntry<H> {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.pattern, PathPattern::CatchAll)
    }

    /// The handler this entry renders, or `None` for a redirect
    pub fn handler(&self) -> Option<&H> {
        match &self.target {
            Target::Render(handler) => Some(handler),
            Target::Redirect(_) => None,
        }
    }
}

/// Outcome of resolving a path against a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a, H> {
    Render {
        page: &'a H,
        params: Params,
        /// Position of the matched entry in the table
        index: usize,
    },
    Redirect {
        to: &'static str,
        index: usize,
    },
}

impl<'a, H> Resolution<'a, H> {
    pub fn index(&self) -> usize {
        match self {
            Resolution::Render { index, .. } | Resolution::Redirect { index, .. } => *index,
        }
    }
}

/// Ordered route table ending in a mandatory catch-all
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    kind: RouteTableKind,
    entries: Vec<RouteEntry<H>>,
}

impl<H> RouteTable<H> {
    pub fn builder(kind: RouteTableKind) -> RouteTableBuilder<H> {
        RouteTableBuilder {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> RouteTableKind {
        self.kind
    }

    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `path` by scanning entries in order; the first match wins.
    ///
    /// Query strings and fragments are ignored. Never fails: the trailing
    /// catch-all answers anything the earlier entries do not.
    pub fn resolve(&self, path: &str) -> Resolution<'_, H> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = split_segments(path).collect();

        for (index, entry) in self.entries.iter().enumerate() {
            let Some(params) = entry.pattern.matches(&parts, entry.exact) else {
                continue;
            };

            debug!(
                table = ?self.kind,
                path,
                pattern = entry.pattern.as_str(),
                index,
                "route matched"
            );

            return match &entry.target {
                Target::Render(page) => Resolution::Render {
                    page,
                    params,
                    index,
                },
                Target::Redirect(to) => Resolution::Redirect { to: *to, index },
            };
        }

        // Unreachable for builder-made tables, which always end in a catch-all
        Resolution::Redirect {
            to: ROOT_PATH,
            index: self.entries.len(),
        }
    }
}

/// Builds a [`RouteTable`]; [`RouteTableBuilder::fallback`] closes the table
/// with the catch-all, so an unterminated table cannot be constructed.
pub struct RouteTableBuilder<H> {
    kind: RouteTableKind,
    entries: Vec<RouteEntry<H>>,
}

impl<H> RouteTableBuilder<H> {
    /// Entry that matches only the identical path
    pub fn exact(self, pattern: &'static str, handler: H) -> Self {
        self.push(pattern, true, handler)
    }

    /// Entry that matches the path and anything below it
    pub fn prefix(self, pattern: &'static str, handler: H) -> Self {
        self.push(pattern, false, handler)
    }

    /// Append the catch-all redirect and finish the table
    pub fn fallback(mut self, to: &'static str) -> RouteTable<H> {
        self.entries.push(RouteEntry {
            pattern: PathPattern::CatchAll,
            exact: false,
            target: Target::Redirect(to),
        });

        RouteTable {
            kind: self.kind,
            entries: self.entries,
        }
    }

    fn push(mut self, pattern: &'static str, exact: bool, handler: H) -> Self {
        self.entries.push(RouteEntry {
            pattern: PathPattern::parse(pattern),
            exact,
            target: Target::Render(handler),
        });
        self
    }
}

pub const ROOT_PATH: &str = "/";

lazy_static! {
    static ref AUTHENTICATED_ROUTES: RouteTable<Page> =
        RouteTable::builder(RouteTableKind::Authenticated)
            .exact("/", Page::Home)
            .prefix("/ride", Page::Ride)
            .prefix("/edit-account", Page::EditAccount)
            .prefix("/settings", Page::Settings)
            .prefix("/places", Page::Places)
            .prefix("/add-place", Page::AddPlace)
            .prefix("/find-address", Page::FindAddress)
            .fallback(ROOT_PATH);
    static ref ANONYMOUS_ROUTES: RouteTable<Page> = RouteTable::builder(RouteTableKind::Anonymous)
        .exact("/", Page::OutHome)
        .prefix("/phone-login", Page::PhoneLogin)
        .prefix("/verify-phone/:number", Page::VerifyPhone)
        .prefix("/social-login", Page::SocialLogin)
        .fallback(ROOT_PATH);
}

/// Pick the active table from the authenticated flag
pub fn select_routes(is_logged_in: bool) -> &'static RouteTable<Page> {
    if is_logged_in {
        &AUTHENTICATED_ROUTES
    } else {
        &ANONYMOUS_ROUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(resolution: Resolution<'_, Page>) -> Option<Page> {
        match resolution {
            Resolution::Render { page, .. } => Some(*page),
            Resolution::Redirect { .. } => None,
        }
    }

    #[test]
    fn test_select_routes_by_auth_flag() {
        assert_eq!(select_routes(true).kind(), RouteTableKind::Authenticated);
        assert_eq!(select_routes(false).kind(), RouteTableKind::Anonymous);
    }

    #[test]
    fn test_tables_hold_only_their_own_pages() {
        for entry in select_routes(true).entries() {
            if let Some(page) = entry.handler() {
                assert!(page.requires_auth(), "{:?} leaked into authenticated table", page);
            }
        }
        for entry in select_routes(false).entries() {
            if let Some(page) = entry.handler() {
                assert!(!page.requires_auth(), "{:?} leaked into anonymous table", page);
            }
        }
    }

    #[test]
    fn test_every_table_ends_with_catch_all() {
        for logged_in in [true, false] {
            let table = select_routes(logged_in);
            let last = table.entries().last().expect("table has entries");
            assert!(last.is_catch_all());
            assert_eq!(table.entries().iter().filter(|e| e.is_catch_all()).count(), 1);
        }
    }

    #[test]
    fn test_authenticated_paths() {
        let table = select_routes(true);
        assert_eq!(rendered(table.resolve("/")), Some(Page::Home));
        assert_eq!(rendered(table.resolve("/ride")), Some(Page::Ride));
        assert_eq!(rendered(table.resolve("/edit-account")), Some(Page::EditAccount));
        assert_eq!(rendered(table.resolve("/settings")), Some(Page::Settings));
        assert_eq!(rendered(table.resolve("/places")), Some(Page::Places));
        assert_eq!(rendered(table.resolve("/add-place")), Some(Page::AddPlace));
        assert_eq!(rendered(table.resolve("/find-address")), Some(Page::FindAddress));
    }

    #[test]
    fn test_anonymous_paths() {
        let table = select_routes(false);
        assert_eq!(rendered(table.resolve("/")), Some(Page::OutHome));
        assert_eq!(rendered(table.resolve("/phone-login")), Some(Page::PhoneLogin));
        assert_eq!(rendered(table.resolve("/social-login")), Some(Page::SocialLogin));
    }

    #[test]
    fn test_unknown_paths_redirect_to_root() {
        for logged_in in [true, false] {
            let table = select_routes(logged_in);
            for path in ["/nope", "/admin/login", "/rides", "/verify-phone"] {
                match table.resolve(path) {
                    Resolution::Redirect { to, index } => {
                        assert_eq!(to, "/");
                        assert_eq!(index, table.len() - 1);
                    }
                    other => panic!("{} should redirect, got {:?}", path, other),
                }
            }
        }
    }

    #[test]
    fn test_other_tables_paths_redirect() {
        assert!(rendered(select_routes(false).resolve("/ride")).is_none());
        assert!(rendered(select_routes(false).resolve("/settings")).is_none());
        assert!(rendered(select_routes(true).resolve("/phone-login")).is_none());
        assert!(rendered(select_routes(true).resolve("/verify-phone/+8212345678")).is_none());
    }

    #[test]
    fn test_root_is_exact() {
        // `/` is declared exact, so nested unknown paths fall through to the catch-all
        let table = select_routes(true);
        assert!(rendered(table.resolve("/unknown/deeper")).is_none());
    }

    #[test]
    fn test_prefix_match_respects_segment_boundaries() {
        let table = select_routes(true);
        assert_eq!(rendered(table.resolve("/ride/42")), Some(Page::Ride));
        assert_eq!(rendered(table.resolve("/places/home/edit")), Some(Page::Places));
        assert!(rendered(table.resolve("/rides")).is_none());
        assert!(rendered(table.resolve("/placesx")).is_none());
    }

    #[test]
    fn test_path_parameter_is_captured() {
        let table = select_routes(false);
        match table.resolve("/verify-phone/+821023456789") {
            Resolution::Render { page, params, .. } => {
                assert_eq!(*page, Page::VerifyPhone);
                assert_eq!(params.get("number"), Some("+821023456789"));
                assert_eq!(params.get("missing"), None);
            }
            other => panic!("expected VerifyPhone, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_slash_query_and_case() {
        let table = select_routes(true);
        assert_eq!(rendered(table.resolve("/ride/")), Some(Page::Ride));
        assert_eq!(rendered(table.resolve("/Ride")), Some(Page::Ride));
        assert_eq!(rendered(table.resolve("/settings?tab=privacy")), Some(Page::Settings));
        assert_eq!(rendered(table.resolve("/#top")), Some(Page::Home));
        assert_eq!(rendered(table.resolve("")), Some(Page::Home));
    }

    #[test]
    fn test_resolution_is_idempotent_and_order_stable() {
        let table = select_routes(false);
        let first = table.resolve("/verify-phone/123");
        for _ in 0..10 {
            assert_eq!(table.resolve("/verify-phone/123"), first);
        }
        assert_eq!(first.index(), 2);
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::builder(RouteTableKind::Anonymous)
            .prefix("/a", "broad")
            .exact("/a/b", "narrow")
            .fallback("/");

        match table.resolve("/a/b") {
            Resolution::Render { page, index, .. } => {
                assert_eq!(*page, "broad");
                assert_eq!(index, 0);
            }
            other => panic!("expected broad match, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_entry_rejects_longer_paths() {
        let table = RouteTable::builder(RouteTableKind::Authenticated)
            .exact("/ride", 1)
            .fallback("/");

        assert!(matches!(table.resolve("/ride"), Resolution::Render { page: 1, .. }));
        assert!(matches!(table.resolve("/ride/1"), Resolution::Redirect { to: "/", .. }));
    }

    #[test]
    fn test_pattern_parse() {
        assert_eq!(PathPattern::parse("*"), PathPattern::CatchAll);
        assert_eq!(PathPattern::parse("/verify-phone/:number").as_str(), "/verify-phone/:number");
    }
}
