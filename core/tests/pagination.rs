//! View query engine tests: pagination semantics.

use subdash_core::query::{paginate, DEFAULT_PAGE_SIZE};

#[test]
fn forty_five_items_make_three_pages_of_twenty() {
    let items: Vec<u32> = (0..45).collect();

    let page1 = paginate(&items, 1, DEFAULT_PAGE_SIZE);
    assert_eq!(page1.total_pages, 3);
    assert_eq!(page1.items.len(), 20);

    let page2 = paginate(&items, 2, DEFAULT_PAGE_SIZE);
    assert_eq!(page2.items.len(), 20);

    let page3 = paginate(&items, 3, DEFAULT_PAGE_SIZE);
    assert_eq!(page3.items.len(), 5);
}

#[test]
fn concatenated_pages_reconstruct_the_collection() {
    let items: Vec<u32> = (0..103).collect();
    let total_pages = paginate(&items, 1, DEFAULT_PAGE_SIZE).total_pages;

    let mut reconstructed = Vec::new();
    for page in 1..=total_pages {
        reconstructed.extend(paginate(&items, page, DEFAULT_PAGE_SIZE).items);
    }
    assert_eq!(reconstructed, items, "Pages in order must partition the collection exactly");
}

#[test]
fn out_of_range_pages_are_clamped() {
    let items: Vec<u32> = (0..45).collect();

    let below = paginate(&items, 0, DEFAULT_PAGE_SIZE);
    let first = paginate(&items, 1, DEFAULT_PAGE_SIZE);
    assert_eq!(below.current_page, 1);
    assert_eq!(below.items, first.items, "Page 0 must clamp to page 1");

    let beyond = paginate(&items, first.total_pages + 5, DEFAULT_PAGE_SIZE);
    let last = paginate(&items, first.total_pages, DEFAULT_PAGE_SIZE);
    assert_eq!(beyond.current_page, last.current_page);
    assert_eq!(beyond.items, last.items, "Overflow must clamp to the last page");
}

#[test]
fn empty_collection_reports_one_empty_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 1, DEFAULT_PAGE_SIZE);
    assert_eq!(page.total_pages, 1, "Empty result sets report a single page by convention");
    assert_eq!(page.current_page, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
}

#[test]
fn exact_multiple_has_no_trailing_empty_page() {
    let items: Vec<u32> = (0..40).collect();
    let page = paginate(&items, 1, DEFAULT_PAGE_SIZE);
    assert_eq!(page.total_pages, 2, "40 items at size 20 is exactly 2 pages");
    assert_eq!(paginate(&items, 2, DEFAULT_PAGE_SIZE).items.len(), 20);
}

#[test]
fn page_metadata_reports_filtered_total() {
    let items: Vec<u32> = (0..7).collect();
    let page = paginate(&items, 1, 3);
    assert_eq!(page.total_items, 7);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items, vec![0, 1, 2]);
}
