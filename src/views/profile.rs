use console::style;

use crate::api::UserApi;
use crate::models::Researcher;
use crate::views::state::{self, FetchState, ViewContext};

/// 연구자 프로필 페이지의 뷰 상태
pub struct ProfileView {
    pub researcher: FetchState<Researcher>,
}

pub async fn load<A: UserApi + Sync>(ctx: &ViewContext, api: &A, user_id: i64) -> ProfileView {
    let researcher = state::load(ctx.cancel_token(), api.user(user_id)).await;
    ProfileView { researcher }
}

impl ProfileView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let researcher = match &self.researcher {
            FetchState::Ready(researcher) => researcher,
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
                return out;
            }
            _ => {
                out.push_str("Loading researcher...\n");
                return out;
            }
        };

        out.push_str(&format!(
            "{} <{}>\n",
            style(&researcher.name).bold(),
            researcher.email.as_deref().unwrap_or("-")
        ));
        if let Some(institution) = researcher.institution.as_deref() {
            out.push_str(&format!("Institution: {institution}\n"));
        }
        if let Some(orcid) = researcher.orcid.as_deref() {
            out.push_str(&format!("ORCID: {orcid}\n"));
        }
        if !researcher.roles.is_empty() {
            out.push_str(&format!("Roles: {}\n", researcher.roles.join(", ")));
        }

        out
    }
}
