pub mod header;
pub mod sidebar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::system::auth::guard::RequireAuth;
use header::Header;
use sidebar::Sidebar;

/// Shell of every signed-in page: sidebar, header and the routed page
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="app-layout">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>
                <div class="app-main">
                    <Header />
                    <main class="app-content">
                        <Outlet />
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}
