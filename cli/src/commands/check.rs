use colored::*;
use eolcheck::api::{FetchError, fetch_release};
use eolcheck::check::{Decision, check_record, today};

pub const EXIT_NOT_IMPENDING: i32 = 0;
pub const EXIT_IMPENDING: i32 = 1;
pub const EXIT_NO_DATA: i32 = 2;
pub const EXIT_FAILURE: i32 = 3;

/// Handles the check command: one fetch, one decision, one exit code.
///
/// On an impending result the relevant date string is printed to stdout as
/// the only output, so CI scripts can capture it directly. All diagnostics
/// go to stderr. The returned code is the process exit status.
pub async fn handle_check(distro: String, release: String, lts: bool) -> i32 {
    let record = match fetch_release(&distro, &release).await {
        Ok(record) => record,
        Err(e) => {
            let code = fetch_exit_code(&e);
            if code == EXIT_NO_DATA {
                eprintln!("{}", e.to_string().yellow());
            } else {
                eprintln!("{}", e.to_string().red());
            }
            return code;
        }
    };

    match check_record(&record, lts, today()) {
        Ok(Decision::Impending { date }) => {
            println!("{}", date);
            EXIT_IMPENDING
        }
        Ok(Decision::NotImpending) => EXIT_NOT_IMPENDING,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            EXIT_FAILURE
        }
    }
}

fn fetch_exit_code(error: &FetchError) -> i32 {
    match error {
        FetchError::NoData(..) => EXIT_NO_DATA,
        FetchError::RequestFailed(..) | FetchError::Transport(..) | FetchError::InvalidData(..) => {
            EXIT_FAILURE
        }
    }
}
