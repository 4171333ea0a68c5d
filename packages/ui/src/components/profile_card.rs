use dioxus::prelude::*;

use crate::render::ProfileView;

#[component]
pub fn ProfileCard(profile: ProfileView) -> Element {
    rsx! {
        section { class: "card profile",
            h2 { "Profile" }
            dl {
                dt { "Username" }
                dd { id: "profile-username", "{profile.username}" }
                dt { "Role" }
                dd { id: "profile-role", "{profile.role}" }
                dt { "Member since" }
                dd { id: "profile-created-at", "{profile.created_at}" }
            }
        }
    }
}
