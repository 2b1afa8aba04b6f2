#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    User,
    Folder,
    File,
    Mail,
    Grad,
    Arrow,
    Sun,
    Moon,
}

/// One stroked element of a 24x24 outline icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
        rx: &'static str,
    },
}

pub const VIEW_BOX: &str = "0 0 24 24";

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::Home,
        Icon::User,
        Icon::Folder,
        Icon::File,
        Icon::Mail,
        Icon::Grad,
        Icon::Arrow,
        Icon::Sun,
        Icon::Moon,
    ];

    pub fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Home => &[
                Shape::Path("m3 9 9-7 9 7v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Shape::Path("M9 22V12h6v10"),
            ],
            Icon::User => &[
                Shape::Circle {
                    cx: "12",
                    cy: "7",
                    r: "4",
                },
                Shape::Path("M5 21v-2a5 5 0 0 1 5-5h4a5 5 0 0 1 5 5v2"),
            ],
            Icon::Folder => &[Shape::Path("M3 7h5l2 2h11v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z")],
            Icon::File => &[
                Shape::Path("M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12V8z"),
                Shape::Path("M14 2v6h6"),
            ],
            Icon::Mail => &[
                Shape::Rect {
                    x: "2",
                    y: "4",
                    width: "20",
                    height: "16",
                    rx: "2",
                },
                Shape::Path("m22 7-9 6a2 2 0 0 1-2 0L2 7"),
            ],
            Icon::Grad => &[
                Shape::Path("m22 10-10-5L2 10l10 5 10-5z"),
                Shape::Path("M6 12v5a10 6 0 0 0 12 0v-5"),
            ],
            Icon::Arrow => &[Shape::Path("M5 12h10"), Shape::Path("m12 7 5 5-5 5")],
            Icon::Sun => &[
                Shape::Circle {
                    cx: "12",
                    cy: "12",
                    r: "4",
                },
                Shape::Path(
                    "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41",
                ),
            ],
            Icon::Moon => &[Shape::Path("M21 12.79A9 9 0 1 1 11.21 3 7.5 7.5 0 0 0 21 12.79z")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_draws_something() {
        for icon in Icon::ALL {
            let shapes = icon.shapes();
            assert!(!shapes.is_empty(), "{icon:?}");
            for shape in shapes {
                if let Shape::Path(d) = shape {
                    assert!(d.starts_with(['m', 'M']), "{icon:?} path {d}");
                }
            }
        }
    }

    #[test]
    fn test_shapes_fit_the_view_box() {
        let coord = |s: &str| s.parse::<f32>().unwrap();
        for icon in Icon::ALL {
            for shape in icon.shapes() {
                match *shape {
                    Shape::Circle { cx, cy, r } => {
                        assert!(coord(cx) - coord(r) >= 0.0 && coord(cx) + coord(r) <= 24.0);
                        assert!(coord(cy) - coord(r) >= 0.0 && coord(cy) + coord(r) <= 24.0);
                    }
                    Shape::Rect {
                        x, y, width, height, ..
                    } => {
                        assert!(coord(x) + coord(width) <= 24.0);
                        assert!(coord(y) + coord(height) <= 24.0);
                    }
                    Shape::Path(_) => {}
                }
            }
        }
    }
}
