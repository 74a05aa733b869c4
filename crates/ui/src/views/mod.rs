mod blocks;
mod quiz;
mod reader;
mod sidebar;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use reader::ReaderView;
pub use state::ViewError;
