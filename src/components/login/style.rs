//! Class lists for the login page layout.

/// Full-viewport background, content centered.
pub const CONTAINER: &str = "flex justify-center items-center ml-0 w-full min-w-full min-h-screen bg-black bg-center bg-no-repeat bg-cover";
pub const LOGIN_CONTENT: &str = "flex relative z-10 flex-col justify-center items-stretch py-5 w-full max-w-[550px] min-h-[320px] rounded-[3px] bg-slate-900/80 text-slate-100";
pub const LOGO_WRAPPER: &str = "flex flex-col justify-center items-center p-6";
pub const LOGO: &str = "mb-4 w-full max-w-[100px]";
pub const TITLE_WRAPPER: &str = "text-center";
pub const MAIN_TITLE: &str = "text-[32px]";
pub const SUB_TITLE: &str = "text-base text-slate-400";
pub const OUTER_BOX: &str = "flex overflow-y-hidden justify-center items-center";
pub const INNER_BOX: &str = "flex flex-col grow justify-center items-center p-8 w-full max-w-[415px] transition duration-[250ms] ease-in-out max-[320px]:p-6";
/// Slide in from the left. Keyframes live in `style/input.css`.
pub const ENTER_ANIMATION: &str = "animate-fly-in";
pub const SUBMIT_BUTTON: &str = "flex justify-center py-2 w-full font-bold text-white bg-blue-600 rounded hover:bg-blue-500 disabled:opacity-50";
pub const LINK_BUTTON: &str = "p-0 mt-1 text-blue-400 hover:text-blue-300 hover:underline";
pub const INPUT: &str = "py-1 px-2 w-full text-black bg-gray-100 rounded border border-gray-500 invalid:border-red-500";
pub const FIELD: &str = "flex flex-col gap-1 mb-3 w-full";

/// Inner box of a panel that animates in.
pub fn animated_inner_box() -> String {
    format!("{INNER_BOX} {ENTER_ANIMATION}")
}
