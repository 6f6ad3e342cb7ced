//! Fetching what each tab shows.

use super::content::TabContent;
use super::types::Tab;
use crate::api::PortfolioService;
use crate::error::FolioResult;
use crate::models::{ContactMessage, Experience, Post, Project, Skill};

pub async fn load_tab(service: &PortfolioService, tab: Tab) -> FolioResult<TabContent> {
    let content = match tab {
        Tab::About => {
            let (profile, skills) =
                futures::try_join!(service.profile(), service.list::<Skill>())?;
            TabContent::About { profile, skills }
        }
        Tab::Projects => TabContent::Projects(service.list::<Project>().await?),
        Tab::Experiences => {
            let mut experiences = service.list::<Experience>().await?;
            experiences.sort_by(|a, b| b.start_date.cmp(&a.start_date));
            TabContent::Experiences(experiences)
        }
        Tab::Blog => {
            let posts = service.list::<Post>().await?;
            let mut published: Vec<Post> = if service.is_authenticated() {
                posts
            } else {
                posts.into_iter().filter(|p| p.published).collect()
            };
            published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            TabContent::Blog(published)
        }
        Tab::Contact => TabContent::Contact(service.profile().await?),
        Tab::Stats => TabContent::Stats(service.stats().await?),
        Tab::Messages => TabContent::Messages(service.list::<ContactMessage>().await?),
    };
    Ok(content)
}
