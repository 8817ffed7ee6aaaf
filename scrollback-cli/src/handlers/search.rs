use crate::args::SearchArgs;
use crate::context::CliContext;
use crate::output::{print_hits, print_json};
use scrollback::history::SearchRequest;

pub async fn handle_search_command(args: SearchArgs, ctx: &CliContext) -> scrollback::Result<()> {
    let mut request = SearchRequest::new(&args.query).with_limit(args.limit);
    if let Some(project) = args.project {
        request = request.with_project(project);
    }
    if let Some(timeframe) = args.timeframe {
        request = request.with_timeframe(timeframe);
    }

    let hits = ctx.history.search(&request).await?;

    if ctx.output.is_json() {
        print_json(&hits);
    } else {
        print_hits(&args.query, &hits, args.explain);
    }
    Ok(())
}
