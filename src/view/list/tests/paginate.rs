use crate::view::list::paginate;

#[test]
/// Expect 10 items at 8 per page to split into 8 and 2
fn splits_ten_items_into_two_pages() {
    let items: Vec<u32> = (0..10).collect();

    let first = paginate(&items, 8, 1);
    let second = paginate(&items, 8, 2);

    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 8);
    assert_eq!(second.items, vec![8, 9]);
    assert!(first.shows_pagination());
}

#[test]
/// Expect one empty page and no pagination control for an empty list
fn empty_list_has_one_page() {
    let items: Vec<u32> = Vec::new();

    let page = paginate(&items, 6, 1);

    assert_eq!(page.total_pages, 1);
    assert!(page.is_empty());
    assert!(!page.shows_pagination());
}

#[test]
/// Expect concatenated pages to reproduce the ordered list exactly once per item
fn pages_partition_the_list() {
    for count in 0..20usize {
        for page_size in 1..7usize {
            let items: Vec<usize> = (0..count).collect();
            let total_pages = paginate(&items, page_size, 1).total_pages;

            assert_eq!(total_pages, count.div_ceil(page_size).max(1));

            let rebuilt: Vec<usize> = (1..=total_pages)
                .flat_map(|page| paginate(&items, page_size, page).items)
                .collect();

            assert_eq!(rebuilt, items);
        }
    }
}

#[test]
/// Expect a page past the end to be empty rather than panic
fn page_past_end_is_empty() {
    let items: Vec<u32> = (0..3).collect();

    let page = paginate(&items, 2, 5);

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 2);
}

#[test]
/// Expect page size 0 and page 0 to be treated as 1
fn clamps_zero_arguments() {
    let items: Vec<u32> = (0..3).collect();

    let page = paginate(&items, 0, 0);

    assert_eq!(page.page, 1);
    assert_eq!(page.items, vec![0]);
    assert_eq!(page.total_pages, 3);
}
