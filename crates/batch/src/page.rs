use std::future::Future;

use log::debug;
use tickframe_core::Table;

/// Fetch every page of a limit/offset-paginated endpoint and concatenate the
/// results into one table.
///
/// `fetch(limit, offset)` is called until a page comes back shorter than
/// `limit` (or `max_pages` is reached); the offset advances by the number of
/// rows actually returned. An empty first page yields an empty table, not an
/// error.
pub async fn paginate<F, Fut, E>(
    mut fetch: F,
    limit: usize,
    max_pages: Option<usize>,
) -> Result<Table, E>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Table, E>>,
{
    let mut pages = Vec::new();
    let mut offset = 0usize;
    let mut fetched = 0usize;

    loop {
        let page = fetch(limit, offset).await?;
        let rows = page.n_rows();
        if rows > 0 {
            pages.push(page);
        }
        fetched += 1;
        offset += rows;
        if rows < limit || max_pages.is_some_and(|cap| fetched >= cap) {
            break;
        }
    }

    debug!("paginated {fetched} pages, {offset} rows");
    Ok(Table::concat(pages))
}
