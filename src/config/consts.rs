/// Executor used when a host does not set the `executor` variable
pub const DEFAULT_EXECUTOR: &str = "local";
/// Seconds the ssh client waits for a connection before giving up
pub const SSH_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Artemis broker instance name, used in the management MBean name
pub const DEFAULT_BROKER_NAME: &str = "amq";
/// Artemis web console port (serves Jolokia)
pub const DEFAULT_BROKER_WEB_PORT: u16 = 8161;
/// Default administrative user for broker management
pub const DEFAULT_ADMIN_USER: &str = "admin";
/// Default administrative password for broker management
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// AMQP listener port of a router
pub const DEFAULT_ROUTER_PORT: u16 = 5672;
/// Location of the dispatch router configuration file
pub const DEFAULT_ROUTER_CONFIG_PATH: &str = "/etc/qpid-dispatch/qdrouterd.conf";

/// Entries requested per page from `listQueues` / `listAddresses`
pub const JOLOKIA_PAGE_SIZE: u32 = 1000;
/// Timeout applied to every management HTTP request
pub const MANAGEMENT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Extra seconds an external client gets beyond its own `--timeout` before it is killed
pub const CLIENT_TIMEOUT_GRACE_SECS: u64 = 10;
