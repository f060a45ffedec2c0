// Client-side pager used by every listing table

use yew::prelude::*;

pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` rows at the fixed page size.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// The rows visible on `page` (1-based).
pub fn page_slice<T: Clone>(rows: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    rows.iter().skip(start).take(PAGE_SIZE).cloned().collect()
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current: usize,
    pub total_pages: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let current = props.current;
    let total = props.total_pages;

    let go = |page: usize| {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page))
    };

    html! {
        <div class="flex justify-center mt-4 space-x-2">
            <button
                onclick={go(current.saturating_sub(1).max(1))}
                disabled={current == 1}
                class="px-3 py-1 bg-blue-600 text-white rounded disabled:bg-gray-400"
            >
                {"Previous"}
            </button>
            { for (1..=total).map(|page| {
                let class = if page == current {
                    "px-3 py-1 rounded bg-blue-600 text-white"
                } else {
                    "px-3 py-1 rounded bg-gray-200 text-gray-700"
                };
                html! {
                    <button onclick={go(page)} {class}>{page}</button>
                }
            })}
            <button
                onclick={go((current + 1).min(total))}
                disabled={current == total}
                class="px-3 py-1 bg-blue-600 text-white rounded disabled:bg-gray-400"
            >
                {"Next"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(5), 1);
        assert_eq!(page_count(6), 2);
        assert_eq!(page_count(11), 3);
    }

    #[test]
    fn page_slice_is_fixed_size_windows() {
        let rows: Vec<u32> = (1..=12).collect();
        assert_eq!(page_slice(&rows, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&rows, 3), vec![11, 12]);
        assert!(page_slice(&rows, 4).is_empty());
    }
}
