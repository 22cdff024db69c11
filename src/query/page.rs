//! Pagination metadata for the paginated listing.

use crate::models::PageMetadata;

use super::options::ListOptions;

/// Compute counts and neighbouring links for a window of `page_size` rows at `offset`.
///
/// `next` is present only while rows remain past the window. `previous` never points
/// before zero nor past the start of the last page.
pub fn paginate(
    total: u64,
    options: &ListOptions,
    page_size: u32,
    path: &str,
) -> PageMetadata {
    let size = u64::from(page_size.max(1));
    let offset = u64::from(options.offset);

    let pages = total.div_ceil(size);
    let page = offset / size;

    let next = (offset + size < total).then(|| link(options, path, page_size, offset + size));

    let previous = (offset > 0 && total > 0).then(|| {
        let last_page_start = (pages - 1) * size;
        link(
            options,
            path,
            page_size,
            offset.saturating_sub(size).min(last_page_start),
        )
    });

    PageMetadata {
        total,
        pages,
        page,
        next,
        previous,
    }
}

fn link(options: &ListOptions, path: &str, page_size: u32, offset: u64) -> String {
    let offset = u32::try_from(offset).unwrap_or(u32::MAX);
    options.link(path, page_size, offset)
}
