//! End-to-end scenarios for the portfolio page session.

use std::time::{Duration, Instant};

use folio_core::presentation::{GridView, EMPTY_MESSAGE};
use folio_core::{Catalog, Category, PortfolioPage, Project, SelectionState};

fn catalog_of(categories: &[Category]) -> Catalog {
    let projects = categories
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            Project::new(i as u32 + 1, format!("project-{}", i + 1), format!("Project {}", i + 1), category)
        })
        .collect();
    Catalog::new(projects).unwrap()
}

fn row_sizes(page: &PortfolioPage) -> Vec<usize> {
    page.view().grid.rows().iter().map(|r| r.cards.len()).collect()
}

#[test]
fn seven_architecture_projects_form_three_two_two() {
    let mut page = PortfolioPage::new(catalog_of(&[Category::Architecture; 7]));
    page.set_category(Category::Architecture);

    assert_eq!(page.filtered_projects().len(), 7);
    assert_eq!(row_sizes(&page), [3, 2, 2]);
    assert_eq!(row_sizes(&page).iter().sum::<usize>(), 7);
}

#[test]
fn five_projects_under_all_form_three_two() {
    let page = PortfolioPage::new(catalog_of(&[
        Category::Architecture,
        Category::Urban,
        Category::Interiors,
        Category::Urban,
        Category::Architecture,
    ]));

    assert_eq!(page.category(), Category::All);
    assert_eq!(row_sizes(&page), [3, 2]);
}

#[test]
fn no_object_projects_shows_fallback_only() {
    let mut page = PortfolioPage::new(catalog_of(&[Category::Architecture, Category::Urban]));
    page.set_category(Category::Object);

    let view = page.view();
    assert_eq!(view.grid, GridView::Empty { message: EMPTY_MESSAGE });
    assert_eq!(view.grid.rows().len(), 0);
    assert_eq!(view.selected_category(), Some(Category::Object));
}

#[test]
fn filtered_rows_concatenate_back_to_filtered_list() {
    let mut page = PortfolioPage::new(Catalog::embedded().unwrap());

    for category in Category::ALL {
        page.set_category(category);
        let expected: Vec<String> = page.filtered_projects().iter().map(|p| p.slug.clone()).collect();

        let view = page.view();
        let flattened: Vec<String> = view
            .grid
            .rows()
            .iter()
            .flat_map(|r| r.cards.iter().map(|c| c.project.slug.clone()))
            .collect();

        assert_eq!(flattened, expected, "category {}", category);
        assert_eq!(expected.len(), page.catalog().count_in(category));
    }
}

#[test]
fn view_is_stable_between_calls() {
    let mut page = PortfolioPage::new(Catalog::embedded().unwrap());
    page.set_category(Category::Interiors);
    assert_eq!(page.view(), page.view());
}

#[test]
fn reselecting_within_window_never_falls_back_to_idle() {
    let mut page = PortfolioPage::new(catalog_of(&[Category::Urban; 3]));
    let t0 = Instant::now();

    let a = page.select("project-1", t0).unwrap();
    let b = page.select("project-2", t0 + Duration::from_millis(600)).unwrap();

    // A's timer fires on schedule; it must not clear B
    assert!(!page.expire(a));
    assert!(!page.expire_due(t0 + Duration::from_millis(800)));
    assert_eq!(page.selection(), SelectionState::Active("project-2"));

    assert!(page.expire(b));
    assert_eq!(page.selection(), SelectionState::Idle);
}

#[test]
fn selection_expires_once_after_delay() {
    let mut page = PortfolioPage::new(catalog_of(&[Category::Urban; 3]));
    let t0 = Instant::now();
    page.select("project-3", t0);

    let mut transitions = 0;
    for step in 0..=20 {
        if page.expire_due(t0 + Duration::from_millis(step * 100)) {
            transitions += 1;
        }
    }

    assert_eq!(transitions, 1);
    assert_eq!(page.active_slug(), None);
}

#[test]
fn active_card_is_highlighted_in_grid() {
    let mut page = PortfolioPage::new(catalog_of(&[Category::Interiors; 4]));
    page.select("project-4", Instant::now());

    let view = page.view();
    let last_row = &view.grid.rows()[1];
    assert_eq!(last_row.cards.len(), 1);
    assert!(last_row.cards[0].is_active);
    assert!(last_row.size.is_large());
}

#[test]
fn unrecognized_category_only_under_all() {
    let json = r#"{
        "version": "0.1.0",
        "projects": [
            {"id": 1, "slug": "tower", "title": "Tower", "category": "Architecture"},
            {"id": 2, "slug": "garden", "title": "Garden", "category": "Landscape"}
        ]
    }"#;
    let mut page = PortfolioPage::new(Catalog::from_json_str(json).unwrap());
    assert_eq!(page.filtered_projects().len(), 2);

    page.set_category(Category::Architecture);
    let slugs: Vec<&str> = page.filtered_projects().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["tower"]);
}

#[test]
fn category_labels_must_match_button_labels_exactly() {
    let json = r#"{
        "version": "0.1.0",
        "projects": [
            {"id": 1, "slug": "stool", "title": "Stool", "category": "objects"},
            {"id": 2, "slug": "hall", "title": "Hall", "category": "architecture"},
            {"id": 3, "slug": "tower", "title": "Tower", "category": "Architecture"}
        ]
    }"#;
    let mut page = PortfolioPage::new(Catalog::from_json_str(json).unwrap());

    page.set_category(Category::Object);
    assert!(page.view().grid.is_empty());

    page.set_category(Category::Architecture);
    let slugs: Vec<&str> = page.filtered_projects().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["tower"]);

    page.set_category(Category::All);
    assert_eq!(page.filtered_projects().len(), 3);
}
