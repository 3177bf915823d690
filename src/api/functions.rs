//! Deployment declarations of the entry points.

use crate::config::FunctionsConfig;
use std::time::Duration;

pub const CREATE_ORDER: &str = "createRazorpayOrder";
pub const HEALTH_CHECK: &str = "healthCheck";
pub const CONNECTION_TEST: &str = "testRazorpayConnection";
pub const SETUP_DIAGNOSTIC: &str = "setupDiagnostic";

/// Per entry point hosting limits. App attestation is not enforced on any
/// of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub region: String,
    pub timeout: Duration,
    pub memory_mb: u32,
    pub enforce_app_check: bool,
}

impl FunctionSpec {
    fn new(name: &'static str, settings: &FunctionsConfig, timeout_secs: u64, memory_mb: u32) -> Self {
        Self {
            name,
            region: settings.region.clone(),
            timeout: Duration::from_secs(timeout_secs),
            memory_mb,
            enforce_app_check: false,
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct DeclaredFunctions {
    pub create_order: FunctionSpec,
    pub health_check: FunctionSpec,
    pub connection_test: FunctionSpec,
    pub setup_diagnostic: FunctionSpec,
}

impl DeclaredFunctions {
    pub fn from_settings(settings: &FunctionsConfig) -> Self {
        Self {
            create_order: FunctionSpec::new(
                CREATE_ORDER,
                settings,
                settings.create_order_timeout_secs,
                256,
            ),
            health_check: FunctionSpec::new(
                HEALTH_CHECK,
                settings,
                settings.health_check_timeout_secs,
                128,
            ),
            connection_test: FunctionSpec::new(
                CONNECTION_TEST,
                settings,
                settings.connection_test_timeout_secs,
                256,
            ),
            setup_diagnostic: FunctionSpec::new(
                SETUP_DIAGNOSTIC,
                settings,
                settings.setup_diagnostic_timeout_secs,
                128,
            ),
        }
    }

    pub fn all(&self) -> [&FunctionSpec; 4] {
        [
            &self.create_order,
            &self.health_check,
            &self.connection_test,
            &self.setup_diagnostic,
        ]
    }
}
