//! Content library commands: browse and read.

use crate::model::{Filter, Resource, ResourceKind, Topic};
use crate::service::ResourceService;

use super::{Context, format, load_pages};

pub(super) fn cmd_library(
    ctx: &Context<'_>,
    search: String,
    kind: Option<ResourceKind>,
    topic: Option<Topic>,
    pages: usize,
) -> Result<(), String> {
    let service = ResourceService::seeded();
    let list = load_pages::<Resource>(&service, ctx.config.items_per_page, pages, |q| {
        q.search = search;
        q.filters.kind = Filter::from(kind);
        q.filters.topic = Filter::from(topic);
    })?;
    ctx.print_list(&list, format::resource_line)
}

pub(super) fn cmd_resource(ctx: &Context<'_>, id: u64) -> Result<(), String> {
    let mut service = ResourceService::seeded();
    let detail = service
        .detail(id)
        .ok_or_else(|| format!("no resource with id {id}"))?;
    ctx.print(&detail, format::resource_detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cli::test_context;
    use crate::config::Config;
    use crate::session::ResolvedSession;

    #[test]
    fn browse_filtered_library() {
        let config = Config::default();
        let session = ResolvedSession::anonymous();
        let ctx = test_context(&config, &session);

        assert!(cmd_library(&ctx, String::new(), None, None, 3).is_ok());
        let screen_videos = cmd_library(
            &ctx,
            "gaming".to_string(),
            Some(ResourceKind::Video),
            Some(Topic::ScreenTime),
            1,
        );
        assert!(screen_videos.is_ok());
    }

    #[test]
    fn unknown_resource_fails() {
        let config = Config::default();
        let session = ResolvedSession::anonymous();
        let ctx = test_context(&config, &session);

        assert!(cmd_resource(&ctx, 1).is_ok());
        assert_eq!(cmd_resource(&ctx, 404).unwrap_err(), "no resource with id 404");
    }
}
