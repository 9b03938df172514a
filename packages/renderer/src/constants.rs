//! Well-known property names, node types and page element ids.

/// Markdown body of a node
pub const CONTENT: &str = "jcr:content";

/// Free-form tag list shown under the content
pub const TAGS: &str = "tags";

/// Author of a comment node (only comment nodes carry it)
pub const COMMENT_BY: &str = "commentBy";

/// Marks a node others may append comments to
pub const PUBLIC_APPEND: &str = "publicAppend";

pub const CREATED_BY: &str = "jcr:createdBy";

pub const UUID: &str = "jcr:uuid";

/// Image shown in the top-right corner of a node's content
pub const IMG_TOP_RIGHT: &str = "img.top.right";

/// Background image of a node's row
pub const IMG_NODE_BKG: &str = "img.node.bkg";

/// JSON payload of a file search result node
pub const FILE_LISTING_JSON: &str = "fs:json";

/// Node type rendered as a list of matching files
pub const FILE_SEARCH_RESULT_TYPE: &str = "fs:fileSearchResult";

/// Owner assumed for nodes without creation metadata
pub const DEFAULT_OWNER: &str = "admin";

pub const ROOT_PATH: &str = "/";

/// Token in content text marking where the attachment should appear
pub const INSERT_ATTACHMENT: &str = "{{insert-attachment}}";

/// Token in server-rendered markdown replaced with the page origin
pub const LOCATION_ORIGIN: &str = "{{locationOrigin}}";

/// Viewport assumed until the host reports the real width
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

pub const MAIN_NODE_CONTENT_ID: &str = "mainNodeContent";
pub const LIST_VIEW_ID: &str = "listView";
pub const STATUS_BAR_ID: &str = "statusBar";

pub const NO_CONTENT_MESSAGE: &str = "No content is available here.";

pub const RENDER_FAILED: &str = "[render failed]";
