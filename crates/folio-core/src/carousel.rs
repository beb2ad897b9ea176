// crates/folio-core/src/carousel.rs
// Category-filtered circular carousel over the project showcase

use folio_types::{Project, ProjectCategory};
use tracing::debug;

// ============================================================================
// Slots
// ============================================================================

/// Where a visible card sits relative to the focused one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
}

impl Slot {
    /// Signed distance from focus, in `-2..=2`
    pub fn offset(self) -> i8 {
        match self {
            Slot::FarLeft => -2,
            Slot::Left => -1,
            Slot::Center => 0,
            Slot::Right => 1,
            Slot::FarRight => 2,
        }
    }

    pub fn from_offset(offset: i8) -> Option<Self> {
        match offset {
            -2 => Some(Slot::FarLeft),
            -1 => Some(Slot::Left),
            0 => Some(Slot::Center),
            1 => Some(Slot::Right),
            2 => Some(Slot::FarRight),
            _ => None,
        }
    }

    /// Center and the two neighbours take clicks; the outer pair is decoration
    pub fn is_interactive(self) -> bool {
        matches!(self, Slot::Left | Slot::Center | Slot::Right)
    }

    /// Neighbours can be clicked to bring them to the center
    pub fn is_adjacent(self) -> bool {
        matches!(self, Slot::Left | Slot::Right)
    }

    pub fn visual(self) -> SlotVisual {
        match self {
            Slot::Center => SlotVisual {
                translate_x_pct: 0.0,
                scale: 1.0,
                rotate_y_deg: 0.0,
                opacity: 1.0,
                brightness: 1.2,
                z_index: 30,
            },
            Slot::Right => SlotVisual {
                translate_x_pct: 110.0,
                scale: 0.85,
                rotate_y_deg: -35.0,
                opacity: 0.7,
                brightness: 0.7,
                z_index: 20,
            },
            Slot::Left => SlotVisual {
                translate_x_pct: -110.0,
                scale: 0.85,
                rotate_y_deg: 35.0,
                opacity: 0.7,
                brightness: 0.7,
                z_index: 20,
            },
            Slot::FarRight => SlotVisual {
                translate_x_pct: 220.0,
                scale: 0.7,
                rotate_y_deg: -45.0,
                opacity: 0.0,
                brightness: 0.5,
                z_index: 10,
            },
            Slot::FarLeft => SlotVisual {
                translate_x_pct: -220.0,
                scale: 0.7,
                rotate_y_deg: 45.0,
                opacity: 0.0,
                brightness: 0.5,
                z_index: 10,
            },
        }
    }
}

/// Fixed render geometry for a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotVisual {
    pub translate_x_pct: f32,
    pub scale: f32,
    pub rotate_y_deg: f32,
    pub opacity: f32,
    pub brightness: f32,
    pub z_index: u8,
}

impl SlotVisual {
    /// Inline style for a card in this slot
    pub fn to_css(&self, interactive: bool) -> String {
        let mut styles = vec![
            format!(
                "transform:translateX({}%) scale({}) rotateY({}deg)",
                self.translate_x_pct, self.scale, self.rotate_y_deg
            ),
            format!("opacity:{}", self.opacity),
            format!("z-index:{}", self.z_index),
            format!("filter:brightness({})", self.brightness),
            "transform-style:preserve-3d".to_string(),
        ];
        if !interactive {
            styles.push("pointer-events:none".to_string());
        }
        styles.join(";")
    }
}

/// An index of the filtered list together with the slot it renders in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub slot: Slot,
}

/// Assign slots to a filtered list of `len` items focused at `focus`.
///
/// Result is ordered left to right. Items beyond the `±2` window are omitted.
/// A focus outside the list wraps around so the result never refers to a
/// missing item.
pub fn positions_for(len: usize, focus: usize) -> Vec<Placement> {
    if len == 0 {
        return Vec::new();
    }
    let focus = focus % len;
    let back = |d: usize| (focus + len - d % len) % len;
    let ahead = |d: usize| (focus + d) % len;
    let at = |index, slot| Placement { index, slot };

    match len {
        1 => vec![at(focus, Slot::Center)],
        // both neighbours are the same item, keep it on the left
        2 => vec![at(back(1), Slot::Left), at(focus, Slot::Center)],
        3 => vec![
            at(back(1), Slot::Left),
            at(focus, Slot::Center),
            at(ahead(1), Slot::Right),
        ],
        4 => vec![
            at(back(1), Slot::Left),
            at(focus, Slot::Center),
            at(ahead(1), Slot::Right),
            at(ahead(2), Slot::FarRight),
        ],
        _ => vec![
            at(back(2), Slot::FarLeft),
            at(back(1), Slot::Left),
            at(focus, Slot::Center),
            at(ahead(1), Slot::Right),
            at(ahead(2), Slot::FarRight),
        ],
    }
}

/// Indices of `projects` visible under `category`, in definition order
pub fn filter_indices(projects: &[Project], category: ProjectCategory) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_in(category))
        .map(|(i, _)| i)
        .collect()
}

// ============================================================================
// View mode
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Carousel,
    Grid,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Carousel => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Carousel,
        }
    }
}

// ============================================================================
// Carousel
// ============================================================================

/// Filter selection, derived list and focus over a fixed project set.
///
/// Focus is `Some` exactly when the filtered list is non-empty and is always
/// in range. Changing the category resets it to the first item.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    projects: Vec<Project>,
    category: ProjectCategory,
    filtered: Vec<usize>,
    focus: usize,
}

impl Carousel {
    pub fn new(projects: Vec<Project>) -> Self {
        let filtered = filter_indices(&projects, ProjectCategory::All);
        Self {
            projects,
            category: ProjectCategory::All,
            filtered,
            focus: 0,
        }
    }

    pub fn category(&self) -> ProjectCategory {
        self.category
    }

    /// Replace the category, recompute the list and reset focus to 0
    pub fn select_category(&mut self, category: ProjectCategory) {
        self.category = category;
        self.filtered = filter_indices(&self.projects, category);
        self.focus = 0;
        debug!(%category, visible = self.filtered.len(), "Category selected");
    }

    /// Same as [`select_category`](Self::select_category) for an untrusted label
    pub fn select_category_raw(&mut self, raw: &str) {
        self.select_category(ProjectCategory::parse_lenient(raw));
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// The filtered list, in definition order
    pub fn items(&self) -> impl Iterator<Item = &Project> + '_ {
        self.filtered.iter().map(|&i| &self.projects[i])
    }

    /// Filtered items with a render key scoped to the active category, so a
    /// project that survives a filter change is still mounted afresh.
    pub fn keyed_items(&self) -> impl Iterator<Item = (String, usize, &Project)> + '_ {
        let category = self.category;
        self.items()
            .enumerate()
            .map(move |(index, project)| (format!("{}:{}", category, project.id), index, project))
    }

    /// Item at `index` of the filtered list
    pub fn item(&self, index: usize) -> Option<&Project> {
        self.filtered.get(index).map(|&i| &self.projects[i])
    }

    pub fn focus(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.focus)
    }

    pub fn focused(&self) -> Option<&Project> {
        self.item(self.focus)
    }

    pub fn next(&mut self) {
        let n = self.len();
        if n > 1 {
            self.focus = (self.focus + 1) % n;
        }
    }

    pub fn previous(&mut self) {
        let n = self.len();
        if n > 1 {
            self.focus = (self.focus + n - 1) % n;
        }
    }

    /// Focus a neighbour of the current card. Anything not in a `±1` slot
    /// (the center itself, the outer pair, out of range) is ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.slot_of(index) {
            Some(slot) if slot.is_adjacent() => {
                self.focus = index;
                true
            }
            _ => false,
        }
    }

    /// Focus any in-range index (navigation dots). Returns `false` when the
    /// focus did not move.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len() && index != self.focus {
            self.focus = index;
            true
        } else {
            false
        }
    }

    pub fn placements(&self) -> Vec<Placement> {
        positions_for(self.len(), self.focus)
    }

    pub fn slot_of(&self, index: usize) -> Option<Slot> {
        self.placements()
            .into_iter()
            .find(|p| p.index == index)
            .map(|p| p.slot)
    }

    /// Number of projects shown under `category`
    pub fn count_for(&self, category: ProjectCategory) -> usize {
        self.projects.iter().filter(|p| p.is_in(category)).count()
    }

    /// `All` plus every category at least one project carries, in enumeration order
    pub fn available_categories(&self) -> Vec<ProjectCategory> {
        ProjectCategory::ALL
            .into_iter()
            .filter(|&c| c == ProjectCategory::All || self.count_for(c) > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProjectCategory::*;

    fn project(id: &str, categories: &[ProjectCategory]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: String::new(),
            tags: vec![],
            image_url: None,
            github_url: None,
            demo_url: None,
            status: None,
            categories: categories.to_vec(),
        }
    }

    fn sample() -> Carousel {
        Carousel::new(vec![
            project("a", &[Web, Backend]),
            project("b", &[Design]),
            project("c", &[Web]),
            project("d", &[Database, Backend]),
            project("e", &[Web, Database]),
            project("f", &[Tools]),
        ])
    }

    fn ids(c: &Carousel) -> Vec<String> {
        c.items().map(|p| p.id.clone()).collect()
    }

    fn slots(len: usize, focus: usize) -> Vec<(usize, i8)> {
        positions_for(len, focus)
            .into_iter()
            .map(|p| (p.index, p.slot.offset()))
            .collect()
    }

    // ============================================================================
    // Filtering
    // ============================================================================

    #[test]
    fn test_all_shows_everything_in_order() {
        let c = sample();
        assert_eq!(ids(&c), ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_filter_keeps_definition_order() {
        let mut c = sample();
        c.select_category(Web);
        assert_eq!(ids(&c), ["a", "c", "e"]);
        c.select_category(Backend);
        assert_eq!(ids(&c), ["a", "d"]);
    }

    #[test]
    fn test_filter_matches_membership_for_every_category() {
        let c = sample();
        for category in ProjectCategory::ALL {
            let expected: Vec<usize> = c
                .projects
                .iter()
                .enumerate()
                .filter(|(_, p)| category == All || p.categories.contains(&category))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(filter_indices(&c.projects, category), expected, "{}", category);
        }
    }

    #[test]
    fn test_empty_category() {
        let mut c = sample();
        c.select_category(Security);
        assert!(c.is_empty());
        assert_eq!(c.focus(), None);
        assert_eq!(c.focused(), None);
        assert!(c.placements().is_empty());
        c.next();
        c.previous();
        assert!(!c.select_index(0));
        assert_eq!(c.focus(), None);
    }

    #[test]
    fn test_category_change_resets_focus() {
        let mut c = sample();
        c.next();
        c.next();
        c.next();
        assert_eq!(c.focus(), Some(3));
        c.select_category(Web);
        assert_eq!(c.focus(), Some(0));
        c.next();
        c.select_category(Web);
        assert_eq!(c.focus(), Some(0));
    }

    #[test]
    fn test_raw_category_falls_back_to_all() {
        let mut c = sample();
        c.select_category(Web);
        c.select_category_raw("Quantum");
        assert_eq!(c.category(), All);
        assert_eq!(c.len(), 6);
        c.select_category_raw("database");
        assert_eq!(c.category(), Database);
    }

    #[test]
    fn test_available_categories() {
        let c = sample();
        assert_eq!(
            c.available_categories(),
            vec![All, Web, Backend, Database, Tools, Design]
        );
        assert_eq!(c.count_for(Web), 3);
        assert_eq!(c.count_for(All), 6);
        assert_eq!(c.count_for(Ai), 0);
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    #[test]
    fn test_next_previous_wrap() {
        let mut c = sample();
        c.previous();
        assert_eq!(c.focus(), Some(5));
        c.next();
        assert_eq!(c.focus(), Some(0));
    }

    #[test]
    fn test_round_trip_law() {
        for n in 2..=7 {
            let projects: Vec<Project> = (0..n).map(|i| project(&i.to_string(), &[Web])).collect();
            for start in 0..n {
                let mut c = Carousel::new(projects.clone());
                c.jump_to(start);
                assert_eq!(c.focus(), Some(start));
                c.next();
                c.previous();
                assert_eq!(c.focus(), Some(start));
                c.previous();
                c.next();
                assert_eq!(c.focus(), Some(start));
            }
        }
    }

    #[test]
    fn test_single_item_navigation_is_noop() {
        let mut c = sample();
        c.select_category(Tools);
        c.next();
        assert_eq!(c.focus(), Some(0));
        c.previous();
        assert_eq!(c.focus(), Some(0));
    }

    #[test]
    fn test_select_index_only_accepts_neighbours() {
        let mut c = sample();
        // focus 0 of 6: left is 5, right is 1, outer pair is 4 and 2
        assert!(!c.select_index(0));
        assert!(!c.select_index(2));
        assert!(!c.select_index(4));
        assert!(!c.select_index(3));
        assert!(!c.select_index(42));
        assert_eq!(c.focus(), Some(0));

        assert!(c.select_index(5));
        assert_eq!(c.focus(), Some(5));
        assert!(c.select_index(0));
        assert_eq!(c.focus(), Some(0));
    }

    #[test]
    fn test_select_index_with_two_items() {
        let mut c = sample();
        c.select_category(Backend);
        assert!(c.select_index(1));
        assert_eq!(c.focus(), Some(1));
        assert!(c.select_index(0));
        assert_eq!(c.focus(), Some(0));
    }

    #[test]
    fn test_jump_to() {
        let mut c = sample();
        assert!(c.jump_to(3));
        assert_eq!(c.focused().map(|p| p.id.as_str()), Some("d"));
        assert!(!c.jump_to(6));
        assert_eq!(c.focus(), Some(3));
    }

    #[test]
    fn test_ignored_clicks_report_no_change() {
        let mut c = sample();
        c.jump_to(2);
        // center card and the current dot leave the focus where it is
        assert!(!c.select_index(2));
        assert!(!c.jump_to(2));
        assert_eq!(c.focus(), Some(2));

        c.select_category(Embedded);
        assert!(!c.jump_to(0));
        assert!(!c.select_index(0));
        assert_eq!(c.focus(), None);
    }

    #[test]
    fn test_keyed_items_restart_per_category() {
        let mut c = sample();
        let all: Vec<(String, usize)> = c.keyed_items().map(|(k, i, _)| (k, i)).collect();
        assert_eq!(all[4], ("All:e".to_string(), 4));

        c.select_category(Web);
        let web: Vec<(String, usize)> = c.keyed_items().map(|(k, i, _)| (k, i)).collect();
        assert_eq!(
            web,
            vec![
                ("Web:a".to_string(), 0),
                ("Web:c".to_string(), 1),
                ("Web:e".to_string(), 2),
            ]
        );
        assert!(web.iter().all(|(k, _)| !all.iter().any(|(old, _)| old == k)));
    }

    // ============================================================================
    // Slot assignment
    // ============================================================================

    #[test]
    fn test_positions_empty_and_single() {
        assert!(slots(0, 0).is_empty());
        assert_eq!(slots(1, 0), [(0, 0)]);
    }

    #[test]
    fn test_positions_two() {
        assert_eq!(slots(2, 0), [(1, -1), (0, 0)]);
        assert_eq!(slots(2, 1), [(0, -1), (1, 0)]);
    }

    #[test]
    fn test_positions_three() {
        assert_eq!(slots(3, 0), [(2, -1), (0, 0), (1, 1)]);
        assert_eq!(slots(3, 2), [(1, -1), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_positions_four() {
        assert_eq!(slots(4, 0), [(3, -1), (0, 0), (1, 1), (2, 2)]);
        assert_eq!(slots(4, 3), [(2, -1), (3, 0), (0, 1), (1, 2)]);
    }

    #[test]
    fn test_positions_five_or_more() {
        assert_eq!(slots(5, 0), [(3, -2), (4, -1), (0, 0), (1, 1), (2, 2)]);
        assert_eq!(slots(8, 6), [(4, -2), (5, -1), (6, 0), (7, 1), (0, 2)]);
    }

    #[test]
    fn test_center_always_on_focus() {
        for n in 1..=9 {
            for focus in 0..n {
                let placements = positions_for(n, focus);
                let center: Vec<_> = placements.iter().filter(|p| p.slot == Slot::Center).collect();
                assert_eq!(center.len(), 1);
                assert_eq!(center[0].index, focus);
                let mut indices: Vec<_> = placements.iter().map(|p| p.index).collect();
                indices.sort_unstable();
                indices.dedup();
                assert_eq!(indices.len(), placements.len(), "n={} focus={}", n, focus);
            }
        }
    }

    #[test]
    fn test_positions_are_deterministic() {
        assert_eq!(positions_for(7, 3), positions_for(7, 3));
    }

    #[test]
    fn test_out_of_range_focus_wraps() {
        assert_eq!(positions_for(3, 4), positions_for(3, 1));
    }

    // ============================================================================
    // Visuals
    // ============================================================================

    #[test]
    fn test_slot_offsets_round_trip() {
        for offset in -2..=2 {
            assert_eq!(Slot::from_offset(offset).map(Slot::offset), Some(offset));
        }
        assert_eq!(Slot::from_offset(3), None);
    }

    #[test]
    fn test_interactivity() {
        assert!(Slot::Center.is_interactive());
        assert!(Slot::Left.is_interactive());
        assert!(!Slot::FarRight.is_interactive());
        assert!(!Slot::Center.is_adjacent());
    }

    #[test]
    fn test_outer_slots_do_not_take_pointer() {
        let far = Slot::FarLeft.visual().to_css(Slot::FarLeft.is_interactive());
        assert!(far.contains("pointer-events:none"));
        assert!(far.contains("translateX(-220%)"));

        let center = Slot::Center.visual().to_css(true);
        assert!(!center.contains("pointer-events"));
        assert!(center.contains("z-index:30"));
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::Carousel);
        assert_eq!(ViewMode::Carousel.toggle(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggle().toggle(), ViewMode::Grid);
    }
}
