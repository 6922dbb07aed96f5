use drift_defs::{
    Block, DetectionFailureResult, DriftStatus, NotificationMessage, ResourceDriftEntry,
    StackDriftResult,
};
use drift_utils::{get_stack_url, FormatterConfig};

fn stack_link(stack_id: &str, stack_name: &str) -> String {
    format!("*<{}|{}>*", get_stack_url(stack_id), stack_name)
}

fn resource_line(resource: &ResourceDriftEntry) -> String {
    format!(
        ">{} *{}*\n>:small_orange_diamond: _{}_",
        resource.drift_status.emoji(),
        resource.physical_resource_id,
        resource.resource_type
    )
}

/// Builds the Slack message for one stack drift result.
///
/// Drifted stacks get a header, one line per reported resource and closing
/// divider. Stacks without drift only produce a header when
/// `show_in_sync_stacks` is set, otherwise the message has no blocks.
pub fn format(stack: &StackDriftResult, config: &FormatterConfig) -> NotificationMessage {
    let link = stack_link(&stack.stack_id, &stack.stack_name);

    if stack.drifted_resource_count > 0 {
        let mut blocks = vec![
            Block::header(format!(":warning: Drift detected at {}", link)),
            Block::divider(),
        ];
        blocks.extend(
            stack
                .resources
                .iter()
                .filter(|resource| {
                    config.show_in_sync_resources || resource.drift_status != DriftStatus::InSync
                })
                .map(|resource| Block::resource_line(resource_line(resource))),
        );
        blocks.push(Block::divider());
        NotificationMessage::new(blocks)
    } else if config.show_in_sync_stacks {
        NotificationMessage::new(vec![Block::header(format!(
            ":heavy_check_mark: No drift detected at {}",
            link
        ))])
    } else {
        NotificationMessage::default()
    }
}

pub fn format_failure(failure: &DetectionFailureResult) -> NotificationMessage {
    NotificationMessage::new(vec![Block::header(format!(
        ":question: Detection failed at {}",
        stack_link(&failure.stack_id, &failure.stack_name)
    ))])
}
