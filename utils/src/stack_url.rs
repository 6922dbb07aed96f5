const STACK_DRIFTS_URL: &str =
    "https://console.aws.amazon.com/cloudformation/home#/stacks/drifts?stackId=";

/// Deep link into the CloudFormation console drift view of a stack.
pub fn get_stack_url(stack_id: &str) -> String {
    format!("{}{}", STACK_DRIFTS_URL, urlencoding::encode(stack_id))
}
