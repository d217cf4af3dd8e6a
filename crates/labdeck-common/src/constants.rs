//! Endpoint paths, element ids, and defaults.

/// Application name used in logs and the page title.
pub const APP_NAME: &str = "labdeck";

/// Default backend base URL (the backend binds port 5000).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Host used when a container URL is derived from its port bindings.
pub const DEFAULT_PUBLIC_HOST: &str = "localhost";

/// Number of containers created when no count is given.
pub const DEFAULT_CREATE_COUNT: u32 = 1;

/// `POST` endpoint creating containers.
pub const CREATE_PATH: &str = "/create";
/// `GET` endpoint listing containers.
pub const LIST_PATH: &str = "/list";
/// `DELETE` endpoint removing containers.
pub const DELETE_PATH: &str = "/delete";

/// Element id of the banner area.
pub const MESSAGE_AREA_ID: &str = "message-area";
/// Element id of the list container.
pub const LIST_ID: &str = "list";
/// Element id of the list loading indicator.
pub const LIST_LOADING_ID: &str = "list-loading";
/// Element id of the "select all" checkbox.
pub const SELECT_ALL_ID: &str = "select-all";
/// Element id of the create button.
pub const CREATE_BUTTON_ID: &str = "create-btn";
/// Element id of the refresh button.
pub const REFRESH_BUTTON_ID: &str = "refresh-btn";
/// Element id of the bulk-delete button.
pub const DELETE_SELECTED_BUTTON_ID: &str = "delete-selected-btn";
/// Element id of the count input.
pub const COUNT_INPUT_ID: &str = "count";

/// Class carried by every row checkbox.
pub const ROW_SELECT_CLASS: &str = "row-select";

/// `data-action` marker carried by per-row delete buttons.
pub const DELETE_ONE_ACTION: &str = "delete-one";
