mod key_store;

use ud_core::ProfileSummary;

pub(crate) fn sample_profile() -> ProfileSummary {
    ProfileSummary {
        id: 2,
        display_name: "Janet Weaver".to_string(),
        avatar_uri: "https://reqres.in/img/faces/2-image.jpg".to_string(),
    }
}
