//! Stylesheets rendered alongside components.

/// Styles for [`ProfileDropdown`](crate::ProfileDropdown) and its entries.
pub static PROFILE_DROPDOWN_CSS: &str = "
.profile-ui-dropdown-toggle {
    display: flex;
    align-items: center;
    gap: 5px;
    padding: 8px 12px;
    border: none;
    border-radius: 4px;
    background: none;
    color: white;
    font-size: 14px;
    cursor: pointer;
    transition: background-color 0.2s;
}

.profile-ui-dropdown-toggle:hover {
    background-color: rgba(255, 255, 255, 0.1);
}

.profile-ui-dropdown-toggle:focus {
    outline: none;
    box-shadow: 0 0 0 2px rgba(0, 114, 195, 0.5);
}

.profile-ui-dropdown-menu {
    min-width: 180px;
    overflow: hidden;
    border-radius: 4px;
    background-color: #f9f9f9;
    box-shadow: 0px 8px 16px 0px rgba(0, 0, 0, 0.2);
}

.profile-ui-menu-entry {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 12px 16px;
    color: #333;
    font-size: 14px;
    text-decoration: none;
    cursor: pointer;
}

.profile-ui-menu-entry:hover {
    background-color: #f1f1f1;
}

.profile-ui-menu-entry:active {
    background-color: #e0e0e0;
}
";
