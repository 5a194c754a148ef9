use crate::dashboards::d001_reports::ui::ReportsDashboard;
use crate::domain::a001_client::ui::{ClientDetails, ClientForm, ClientList};
use crate::domain::a002_contract::ui::{ContractDetails, ContractList};
use crate::domain::a003_product::ui::ProductList;
use crate::domain::a004_supplier::ui::SupplierList;
use crate::domain::a005_internal_order::ui::{InternalOrderDetails, InternalOrderList};
use crate::domain::a006_supplier_order::ui::{SupplierOrderDetails, SupplierOrderList};
use crate::domain::a007_sale::ui::SaleList;
use crate::layout::AppLayout;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::verify_email::VerifyEmailPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/verify-email") view=VerifyEmailPage />
                        <ParentRoute path=path!("") view=AppLayout>
                            <Route path=path!("") view=|| view! { <Redirect path="/reports" /> } />
                            <Route path=path!("reports") view=ReportsDashboard />
                            <Route path=path!("clients") view=ClientList />
                            <Route path=path!("clients/new") view=ClientForm />
                            <Route path=path!("clients/:id") view=ClientDetails />
                            <Route path=path!("clients/:id/edit") view=ClientForm />
                            <Route path=path!("contracts") view=ContractList />
                            <Route path=path!("contracts/:id") view=ContractDetails />
                            <Route path=path!("products") view=ProductList />
                            <Route path=path!("suppliers") view=SupplierList />
                            <Route path=path!("internal-orders") view=InternalOrderList />
                            <Route path=path!("internal-orders/:id") view=InternalOrderDetails />
                            <Route path=path!("supplier-orders") view=SupplierOrderList />
                            <Route path=path!("supplier-orders/:id") view=SupplierOrderDetails />
                            <Route path=path!("sales") view=SaleList />
                        </ParentRoute>
                    </Routes>
                </Router>
            </AuthProvider>
            <ToastHost />
        </ConfigProvider>
    }
}
