mod helpers;
mod some_page;
