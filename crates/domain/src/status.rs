/// Return value of every `_nss_*` entry point (`enum nss_status` in `<nss.h>`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NssStatus {
    TryAgain = -2,
    Unavail = -1,
    NotFound = 0,
    Success = 1,
}

/// Resolver-specific error written through `h_errnop` (`<netdb.h>`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostErrno {
    NetdbInternal = -1,
    HostNotFound = 1,
    TryAgain = 2,
    NoRecovery = 3,
    NoData = 4,
}

impl NssStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NssStatus::TryAgain => "TRYAGAIN",
            NssStatus::Unavail => "UNAVAIL",
            NssStatus::NotFound => "NOTFOUND",
            NssStatus::Success => "SUCCESS",
        }
    }
}
