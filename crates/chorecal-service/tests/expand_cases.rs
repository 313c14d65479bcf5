mod expand_cases_data;

use expand_cases_data::{assert_case, expand_cases};

#[test_log::test]
fn expand_cases_table() {
    for case in expand_cases() {
        assert_case(&case);
    }
}
