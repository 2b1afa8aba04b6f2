use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Blog,
    Contact,
    Mentorship,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Blog,
        Page::Contact,
        Page::Mentorship,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Blog => "/blog",
            Page::Contact => "/contact",
            Page::Mentorship => "/mentorship",
        }
    }

    /// Translation key of the page's name.
    pub const fn label_key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Blog => "blog",
            Page::Contact => "contact",
            Page::Mentorship => "mentorship",
        }
    }

    pub const fn icon(self) -> Icon {
        match self {
            Page::Home => Icon::Home,
            Page::About => Icon::User,
            Page::Projects => Icon::Folder,
            Page::Blog => Icon::File,
            Page::Contact => Icon::Mail,
            Page::Mentorship => Icon::Grad,
        }
    }

    /// Route segment of the page, its path without the leading slash.
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Blog => "blog",
            Page::Contact => "contact",
            Page::Mentorship => "mentorship",
        }
    }

    /// Exact match against the literal page paths.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Page(Page),
    NotFound,
}

pub fn resolve(path: &str) -> RouteMatch {
    match Page::from_path(path) {
        Some(page) => RouteMatch::Page(page),
        None => {
            log::debug!("no page for {path}");
            RouteMatch::NotFound
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub path: &'static str,
    pub label_key: &'static str,
    pub icon: Icon,
}

impl NavItem {
    pub const fn for_page(page: Page) -> Self {
        Self {
            page,
            path: page.path(),
            label_key: page.label_key(),
            icon: page.icon(),
        }
    }
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem::for_page(Page::Home),
    NavItem::for_page(Page::About),
    NavItem::for_page(Page::Projects),
    NavItem::for_page(Page::Blog),
    NavItem::for_page(Page::Contact),
    NavItem::for_page(Page::Mentorship),
];

pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    item.path == pathname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_path_selects_its_page() {
        for page in Page::ALL {
            assert_eq!(resolve(page.path()), RouteMatch::Page(page));
            let others = Page::ALL
                .into_iter()
                .filter(|p| *p != page && p.path() == page.path())
                .count();
            assert_eq!(others, 0);
        }
        assert_eq!(Page::from_path("/mentorship"), Some(Page::Mentorship));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn test_segments_build_the_paths() {
        for page in Page::ALL {
            assert_eq!(format!("/{}", page.segment()), page.path());
            assert_eq!(
                Page::from_path(&format!("/{}", page.segment())),
                Some(page)
            );
        }
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        for path in ["/nope", "/about/", "/About", "/blog/post", "", "/contact?x=1"] {
            assert_eq!(resolve(path), RouteMatch::NotFound, "{path}");
        }
    }

    #[test]
    fn test_nav_items_follow_display_order() {
        let paths = NAV_ITEMS.iter().map(|i| i.path).collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec!["/", "/about", "/projects", "/blog", "/contact", "/mentorship"]
        );
        for (item, page) in NAV_ITEMS.iter().zip(Page::ALL) {
            assert_eq!(item.page, page);
            assert_eq!(item.path, page.path());
            assert_eq!(item.label_key, page.label_key());
            assert_eq!(item.icon, page.icon());
        }
    }

    #[test]
    fn test_exactly_one_active_item() {
        let active_page = |path: &str| {
            NAV_ITEMS
                .iter()
                .find(|i| is_active(i, path))
                .map(|i| i.page)
        };
        assert_eq!(active_page("/blog"), Some(Page::Blog));
        assert_eq!(active_page("/"), Some(Page::Home));
        assert_eq!(active_page("/missing"), None);
        let active = NAV_ITEMS
            .iter()
            .filter(|i| is_active(i, "/contact"))
            .count();
        assert_eq!(active, 1);
    }
}
