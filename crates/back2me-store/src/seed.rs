//! Demo content for a fresh store: two students, one lost and one found
//! post, and a short conversation between them.

use back2me_types::models::{NewPost, PostStatus};
use tracing::info;

use crate::{Store, StoreResult};

pub const SAMPLE_PASSWORD: &str = "password123";

/// Insert the sample records through the normal insert paths, so ids and
/// counters line up with anything added afterwards.
pub fn seed_sample_data(store: &Store) -> StoreResult<()> {
    let sarah = store.register("sarah_j", "sarah@campus.edu", SAMPLE_PASSWORD)?;
    let michael = store.register("michael_c", "michael@campus.edu", SAMPLE_PASSWORD)?;

    store.create_post(
        sarah,
        NewPost {
            status: PostStatus::Lost,
            item_name: "Blue Nike Backpack".into(),
            location: "Library Building - 2nd Floor".into(),
            place: "Near Study Table 12".into(),
            description: "Lost my blue Nike backpack with laptop inside.".into(),
            image_url: None,
        },
    )?;
    store.create_post(
        michael,
        NewPost {
            status: PostStatus::Found,
            item_name: "iPhone 13 Pro".into(),
            location: "Student Cafeteria".into(),
            place: "Table near the main entrance".into(),
            description: "Found an iPhone 13 Pro in black color.".into(),
            image_url: None,
        },
    )?;

    store.send_message(1, sarah, michael, "Hi, is the iPhone still available?")?;
    store.send_message(1, michael, sarah, "Yes, I still have it.")?;

    info!("Seeded sample data: 2 accounts, 2 posts, 2 messages");
    Ok(())
}
