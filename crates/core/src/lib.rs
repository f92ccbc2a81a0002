pub mod post;

pub use post::{BlogPost, PostId, parse_post_id};
