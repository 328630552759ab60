//! Base for pages that show a collection of records.
//!
//! A concrete page implements [`ItemListPage`] and hands it to a
//! [`ListPageController`], which loads the records (and the parent project
//! when one is given), keeps selection and dialog flags, and reports outcomes
//! on the event bus. [`ItemListView`] renders the common table around it.

pub mod controller;
pub mod page;
pub mod state;
pub mod view;

pub use controller::ListPageController;
pub use page::{ItemListPage, ListPageProps};
pub use state::ListPageState;
pub use view::ItemListView;
