//! Responsive layout: which grids collapse, and where.
//!
//! Column counts are read back from the stylesheet itself, so the answer
//! always matches what the browser would get.

use crate::styles::Stylesheet;

/// Viewports at or below this width get single-column layouts.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// True when `viewport_px` falls inside the mobile media block.
pub fn is_compact(viewport_px: u32) -> bool {
    viewport_px <= MOBILE_BREAKPOINT_PX
}

/// Grid containers whose column count depends on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutGrid {
    /// Side-by-side cards
    DashboardRow,
    /// Metrics tiles
    FlexGrid,
    /// Status label/value cells
    StatusGrid,
}

/// Parsed `grid-template-columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    Fixed(u8),
    /// `repeat(auto-fill, minmax(Npx, 1fr))`
    AutoFill { min_px: u32 },
}

impl Columns {
    /// Understands `1fr`, `1fr 1fr`, `repeat(N, ...)` and
    /// `repeat(auto-fill, minmax(Npx, ...))`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(inner) = value.strip_prefix("repeat(") {
            let (count, track) = inner.split_once(',')?;
            let count = count.trim();
            if count == "auto-fill" || count == "auto-fit" {
                let min = track.trim().strip_prefix("minmax(")?.split(',').next()?;
                let min_px = min.trim().strip_suffix("px")?.parse().ok()?;
                return Some(Columns::AutoFill { min_px });
            }
            return count.parse().ok().map(Columns::Fixed);
        }
        let tracks = value.split_whitespace().count();
        (tracks > 0).then(|| Columns::Fixed(tracks.min(u8::MAX as usize) as u8))
    }

    /// True when the grid shows exactly one column.
    pub fn is_single(&self) -> bool {
        matches!(self, Columns::Fixed(1))
    }
}

impl LayoutGrid {
    pub const ALL: [LayoutGrid; 3] = [
        LayoutGrid::DashboardRow,
        LayoutGrid::FlexGrid,
        LayoutGrid::StatusGrid,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            LayoutGrid::DashboardRow => ".dashboard-row",
            LayoutGrid::FlexGrid => ".flex-grid",
            LayoutGrid::StatusGrid => ".status-grid",
        }
    }

    /// Columns this grid resolves to at `viewport_px`.
    pub fn columns(&self, sheet: &Stylesheet, viewport_px: u32) -> Option<Columns> {
        sheet
            .declaration_at(viewport_px, self.selector(), "grid-template-columns")
            .and_then(Columns::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::DASHBOARD_STYLESHEET;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_column_rows_collapse_at_breakpoint() {
        for grid in [LayoutGrid::DashboardRow, LayoutGrid::FlexGrid] {
            assert_eq!(grid.columns(&DASHBOARD_STYLESHEET, 1280), Some(Columns::Fixed(2)));
            assert_eq!(grid.columns(&DASHBOARD_STYLESHEET, 769), Some(Columns::Fixed(2)));
            assert_eq!(grid.columns(&DASHBOARD_STYLESHEET, 768), Some(Columns::Fixed(1)));
            assert_eq!(grid.columns(&DASHBOARD_STYLESHEET, 375), Some(Columns::Fixed(1)));
        }
    }

    #[test]
    fn status_grid_auto_fills_on_desktop() {
        assert_eq!(
            LayoutGrid::StatusGrid.columns(&DASHBOARD_STYLESHEET, 1024),
            Some(Columns::AutoFill { min_px: 200 })
        );
        assert!(
            LayoutGrid::StatusGrid
                .columns(&DASHBOARD_STYLESHEET, 600)
                .is_some_and(|c| c.is_single())
        );
    }

    #[test]
    fn parses_common_column_forms() {
        assert_eq!(Columns::parse("1fr"), Some(Columns::Fixed(1)));
        assert_eq!(Columns::parse("1fr 2fr 1fr"), Some(Columns::Fixed(3)));
        assert_eq!(Columns::parse("repeat(4, 1fr)"), Some(Columns::Fixed(4)));
        assert_eq!(
            Columns::parse("repeat(auto-fit, minmax(150px, 1fr))"),
            Some(Columns::AutoFill { min_px: 150 })
        );
        assert_eq!(Columns::parse(""), None);
    }

    #[test]
    fn compact_boundary_is_inclusive() {
        assert!(is_compact(MOBILE_BREAKPOINT_PX));
        assert!(!is_compact(MOBILE_BREAKPOINT_PX + 1));
    }
}
