mod page_size;
mod urls;

pub use page_size::{POSITION_FUNCTIONS_PAGE_SIZE, PageSize};
pub use urls::build_query_url;
